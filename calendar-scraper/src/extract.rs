use crawl::utils::clean_text;
use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

/// One scheduled meeting, as displayed on the calendar page. Dates and
/// times stay display strings; the document columns hold the cell text,
/// not resolved link targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    pub committee: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub details: String,
    pub agenda_link: String,
    pub minutes_links: String,
    pub audio_video_link: String,
    pub caption_notes: String,
}

/// Extract the meetings under the "All Meetings" section of a calendar
/// page. Upcoming meetings render in an earlier tbody of the same grid and
/// are not extracted.
///
/// The grid id, the skipped cell index and the last-tbody convention all
/// come from the portal's generated markup; they are literal on purpose.
pub fn extract_meeting_data(html: &str) -> Result<Vec<Meeting>, ScrapeError> {
    let document = Html::parse_document(html);

    let grid_selector =
        Selector::parse("table#ctl00_ContentPlaceHolder1_gridCalendar_ctl00").unwrap();
    let grid = document
        .select(&grid_selector)
        .next()
        .ok_or(ScrapeError::Structure("calendar grid table not found"))?;

    // TODO: fetch these paged results before extracting.
    let _additional_pages = pager_links(&grid);

    let tbody_selector = Selector::parse("tbody").unwrap();
    let data_tbody = grid
        .select(&tbody_selector)
        .last()
        .ok_or(ScrapeError::Structure("calendar grid has no tbody"))?;

    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let mut meetings = Vec::new();
    for row in data_tbody.select(&row_selector) {
        meetings.push(meeting_from_row(&row, &cell_selector)?);
    }
    Ok(meetings)
}

/// Links to result pages not yet fetched. The pager sits in a nested table
/// in the grid header; the anchor for the current page is the only one
/// carrying a class (`rgCurrentPage`), the rest are plain.
pub fn pager_links(grid: &ElementRef) -> Vec<String> {
    let pager_selector = Selector::parse("thead table a").unwrap();
    grid.select(&pager_selector)
        .filter(|link| link.value().attr("class").is_none())
        .filter_map(|link| link.value().attr("href").map(str::to_string))
        .collect()
}

fn meeting_from_row(row: &ElementRef, cell_selector: &Selector) -> Result<Meeting, ScrapeError> {
    let cells: Vec<ElementRef> = row.select(cell_selector).collect();
    // Cell 2 is the portal's icon column; it is not mapped.
    Ok(Meeting {
        committee: cell_text(&cells, 0)?,
        date: cell_text(&cells, 1)?,
        time: cell_text(&cells, 3)?,
        location: cell_text(&cells, 4)?,
        details: cell_text(&cells, 5)?,
        agenda_link: cell_text(&cells, 6)?,
        minutes_links: cell_text(&cells, 7)?,
        audio_video_link: cell_text(&cells, 8)?,
        caption_notes: cell_text(&cells, 9)?,
    })
}

fn cell_text(cells: &[ElementRef], index: usize) -> Result<String, ScrapeError> {
    let cell = cells
        .get(index)
        .ok_or(ScrapeError::Row { index, len: cells.len() })?;
    Ok(clean_text(&cell.text().collect::<String>()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CALENDAR_PAGE: &str = r##"
<html><body>
<table id="ctl00_ContentPlaceHolder1_gridCalendar_ctl00">
  <thead>
    <tr>
      <td>
        <table>
          <tbody>
            <tr>
              <td>
                <a class="rgCurrentPage" href="#">1</a>
                <a href="Calendar.aspx?page=2">2</a>
                <a href="Calendar.aspx?page=3">3</a>
              </td>
            </tr>
          </tbody>
        </table>
      </td>
    </tr>
  </thead>
  <tbody>
    <tr>
      <td>Planning Commission</td><td>2/1/2018</td><td></td><td>6:00 PM</td>
      <td>West Conference Room</td><td>Meeting details</td><td>Agenda</td>
      <td>Not available</td><td>Not available</td><td>Not available</td>
    </tr>
  </tbody>
  <tbody>
    <tr>
      <td>City Council</td>
      <td>1/9/2018</td>
      <td><img src="deferred.gif"></td>
      <td>7:00&nbsp;PM</td>
      <td>Council Chambers</td>
      <td>Meeting
details</td>
      <td>Agenda</td>
      <td>Minutes</td>
      <td>Video</td>
      <td>Not&nbsp;available</td>
    </tr>
  </tbody>
</table>
</body></html>
"##;

    #[test]
    fn extracts_only_the_last_tbody() {
        let meetings = extract_meeting_data(CALENDAR_PAGE).unwrap();
        assert_eq!(meetings.len(), 1);
        assert_eq!(
            meetings[0],
            Meeting {
                committee: "City Council".to_string(),
                date: "1/9/2018".to_string(),
                time: "7:00 PM".to_string(),
                location: "Council Chambers".to_string(),
                details: "Meeting details".to_string(),
                agenda_link: "Agenda".to_string(),
                minutes_links: "Minutes".to_string(),
                audio_video_link: "Video".to_string(),
                caption_notes: "Not available".to_string(),
            }
        );
    }

    #[test]
    fn sole_tbody_is_the_data_section() {
        let page = r#"
<table id="ctl00_ContentPlaceHolder1_gridCalendar_ctl00">
  <tbody>
    <tr>
      <td>Library Board</td><td>3/5/2018</td><td></td><td>5:30 PM</td>
      <td>Main Library</td><td>Meeting details</td><td>Agenda</td>
      <td>Minutes</td><td>Video</td><td>Not available</td>
    </tr>
  </tbody>
</table>
"#;
        let meetings = extract_meeting_data(page).unwrap();
        assert_eq!(meetings.len(), 1);
        assert_eq!(meetings[0].committee, "Library Board");
        assert_eq!(meetings[0].time, "5:30 PM");
    }

    #[test]
    fn missing_grid_is_a_structure_error() {
        let err = extract_meeting_data("<html><body></body></html>").unwrap_err();
        assert!(matches!(err, ScrapeError::Structure(_)));
    }

    #[test]
    fn short_row_reports_index_and_length() {
        let page = r#"
<table id="ctl00_ContentPlaceHolder1_gridCalendar_ctl00">
  <tbody>
    <tr>
      <td>City Council</td><td>1/9/2018</td><td></td><td>7:00 PM</td><td>Chambers</td>
    </tr>
  </tbody>
</table>
"#;
        let err = extract_meeting_data(page).unwrap_err();
        assert!(matches!(err, ScrapeError::Row { index: 5, len: 5 }));
    }

    #[test]
    fn pager_links_skip_the_current_page() {
        let document = Html::parse_document(CALENDAR_PAGE);
        let grid_selector =
            Selector::parse("table#ctl00_ContentPlaceHolder1_gridCalendar_ctl00").unwrap();
        let grid = document.select(&grid_selector).next().unwrap();

        assert_eq!(
            pager_links(&grid),
            vec!["Calendar.aspx?page=2", "Calendar.aspx?page=3"]
        );
    }
}
