//! Meeting-record construction from user-entered slots.
//!
//! Turns a timezone plus a batch of date/start/end slots into persisted
//! meeting records. Slots missing a date (or with unparseable times) are
//! dropped per-slot and counted; they never fail the whole batch. Duration
//! handles the overnight case — a meeting is assumed to never exceed 24h.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use uuid::Uuid;

use crate::error::PortalError;
use crate::types::{MeetingRecord, MeetingSlot};

const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, Clone)]
pub struct MeetingBatchInput<'a> {
    /// IANA timezone the slot times were entered in.
    pub timezone: &'a str,
    pub slots: &'a [MeetingSlot],
    pub partner_name: &'a str,
    pub partner_email: Option<&'a str>,
    /// Reference instant for the completed-in-the-past derivation. Passed in
    /// explicitly so the builder stays a pure function.
    pub now: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MeetingBatch {
    /// One record per usable slot, in slot order.
    pub records: Vec<MeetingRecord>,
    /// Slots dropped for a missing date or malformed time.
    pub rejected_count: usize,
    pub warnings: Vec<String>,
}

/// Build meeting records from a slot batch.
///
/// Fails only on an unknown timezone; per-slot problems drop the slot. An
/// all-dropped batch returns an empty record list — refusing to persist an
/// empty submission is the caller's decision.
pub fn build_meeting_records(input: &MeetingBatchInput<'_>) -> Result<MeetingBatch, PortalError> {
    let tz: Tz = input
        .timezone
        .parse()
        .map_err(|_| PortalError::validation(format!("Unknown timezone: {}", input.timezone)))?;

    let mut records = Vec::new();
    let mut rejected_count = 0;
    let mut warnings = Vec::new();

    for (index, slot) in input.slots.iter().enumerate() {
        let Some(date) = slot.date else {
            log::debug!("meeting slot #{} has no date, skipping", index + 1);
            rejected_count += 1;
            continue;
        };

        let (Some(start), Some(end)) = (
            parse_wall_time(&slot.start_time),
            parse_wall_time(&slot.end_time),
        ) else {
            rejected_count += 1;
            let warning = format!(
                "Meeting #{} has an invalid time ({} - {}) and was skipped.",
                index + 1,
                slot.start_time,
                slot.end_time,
            );
            log::warn!("{warning}");
            warnings.push(warning);
            continue;
        };

        let start_minutes = i64::from(start.hour() * 60 + start.minute());
        let end_minutes = i64::from(end.hour() * 60 + end.minute());
        let mut duration = end_minutes - start_minutes;
        if duration < 0 {
            // End before start means the meeting crossed midnight.
            duration += MINUTES_PER_DAY;
        }

        let start_time = start.format("%H:%M").to_string();
        let end_time = end.format("%H:%M").to_string();

        records.push(MeetingRecord {
            id: Uuid::new_v4().to_string(),
            date,
            time: format!("{start_time} - {end_time}"),
            start_time,
            end_time,
            timezone: input.timezone.to_string(),
            duration_minutes: duration as u32,
            partner_name: input.partner_name.to_string(),
            partner_email: input.partner_email.map(str::to_string),
            is_completed: resolve_start_instant(&tz, date, start) <= input.now,
        });
    }

    Ok(MeetingBatch {
        records,
        rejected_count,
        warnings,
    })
}

/// Parse a 24-hour "HH:MM" wall-clock time.
fn parse_wall_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

/// Resolve a local date + time to a UTC instant, tolerating DST gaps.
///
/// During a spring-forward gap `earliest()` returns `None`; fall back to
/// `latest()` (the post-transition instant), and as a last resort interpret
/// the wall time as UTC.
fn resolve_start_instant(tz: &Tz, date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    let naive = NaiveDateTime::new(date, time);

    if let Some(dt) = tz.from_local_datetime(&naive).earliest() {
        return dt.with_timezone(&Utc);
    }
    if let Some(dt) = tz.from_local_datetime(&naive).latest() {
        log::warn!("DST gap for {naive} in {tz}; using post-transition time");
        return dt.with_timezone(&Utc);
    }

    log::warn!("could not resolve {naive} in {tz}; treating as UTC");
    Utc.with_ymd_and_hms(
        date.year(),
        date.month(),
        date.day(),
        time.hour(),
        time.minute(),
        0,
    )
    .single()
    .unwrap_or_else(Utc::now)
}
