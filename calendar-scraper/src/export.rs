use std::path::Path;

use crate::error::ScrapeError;
use crate::extract::Meeting;

/// Output column order; kept in sync with `Meeting`'s fields.
pub const HEADERS: [&str; 9] = [
    "committee",
    "date",
    "time",
    "location",
    "details",
    "agenda_link",
    "minutes_links",
    "audio_video_link",
    "caption_notes",
];

/// Write the header row, then one row per meeting in iteration order. An
/// empty slice still produces the header.
pub fn write_csv(meetings: &[Meeting], path: &Path) -> Result<(), ScrapeError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADERS)?;
    for meeting in meetings {
        writer.write_record([
            &meeting.committee,
            &meeting.date,
            &meeting.time,
            &meeting.location,
            &meeting.details,
            &meeting.agenda_link,
            &meeting.minutes_links,
            &meeting.audio_video_link,
            &meeting.caption_notes,
        ])?;
    }
    writer.flush()?;
    Ok(())
}
