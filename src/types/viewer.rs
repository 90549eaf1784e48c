use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};
use chrono_tz::Tz;

/// Zone rules used to render instants for the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewerZone {
    /// The host's zone, offset resolved per instant.
    Local,
    /// A named IANA zone, offset resolved per instant.
    Named(Tz),
    /// One offset for every instant.
    Fixed(FixedOffset),
}

impl ViewerZone {
    /// Local time of `instant` under this zone's rules.
    pub fn to_local(&self, instant: &DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            ViewerZone::Local => instant.with_timezone(&Local).fixed_offset(),
            ViewerZone::Named(tz) => instant.with_timezone(tz).fixed_offset(),
            ViewerZone::Fixed(offset) => instant.with_timezone(offset),
        }
    }
}

/// The viewer's clock: zone, current instant and zone label.
///
/// Every display string is a function of a timestamp and one `Viewer`, so
/// pinning a `Viewer` pins the output.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewer {
    pub zone: ViewerZone,
    pub now: DateTime<Utc>,
    pub zone_label: String,
}

impl Viewer {
    /// Reads the host clock and zone.
    ///
    /// When `TZ` names an IANA zone (`Europe/Berlin`, `:Europe/Berlin`) that
    /// zone is used and labelled by its abbreviation at `now`. Otherwise the
    /// host zone is used and labelled by its current offset (`UTC+02:00`).
    pub fn local() -> Self {
        let now: DateTime<Utc> = Utc::now();
        match std::env::var("TZ").ok().as_deref().and_then(named_zone) {
            Some(tz) => Self::named(tz, now),
            None => {
                let offset: FixedOffset = ViewerZone::Local.to_local(&now).offset().fix();
                Self {
                    zone: ViewerZone::Local,
                    now,
                    zone_label: offset_label(&offset),
                }
            }
        }
    }

    /// A viewer in an IANA zone, labelled by its abbreviation at `now`.
    pub fn named(tz: Tz, now: DateTime<Utc>) -> Self {
        let zone_label: String = now.with_timezone(&tz).format("%Z").to_string();
        Self {
            zone: ViewerZone::Named(tz),
            now,
            zone_label,
        }
    }

    /// A viewer with a pinned offset, clock and label.
    pub fn fixed(offset: FixedOffset, now: DateTime<Utc>, zone_label: impl Into<String>) -> Self {
        Self {
            zone: ViewerZone::Fixed(offset),
            now,
            zone_label: zone_label.into(),
        }
    }

    /// UTC viewer at `now`, labelled `UTC`.
    pub fn utc(now: DateTime<Utc>) -> Self {
        Self::fixed(Utc.fix(), now, "UTC")
    }

    /// Converts an instant into the viewer's local time.
    pub fn to_local(&self, instant: &DateTime<Utc>) -> DateTime<FixedOffset> {
        self.zone.to_local(instant)
    }

    /// The viewer's current local calendar date.
    pub fn today(&self) -> NaiveDate {
        self.to_local(&self.now).date_naive()
    }
}

/// Resolves a `TZ` value to an IANA zone.
///
/// A leading `:` is ignored. POSIX rule strings (`CET-1CEST,M3.5.0,...`) and
/// unknown names give `None`.
pub fn named_zone(value: &str) -> Option<Tz> {
    let name: &str = value.trim();
    let name: &str = name.strip_prefix(':').unwrap_or(name);
    if name.is_empty() {
        return None;
    }
    name.parse::<Tz>().ok()
}

/// Formats an offset as `UTC+HH:MM` / `UTC-HH:MM`.
pub fn offset_label(offset: &FixedOffset) -> String {
    let secs: i32 = offset.local_minus_utc();
    let sign: char = if secs < 0 { '-' } else { '+' };
    let abs: i32 = secs.abs();
    format!("UTC{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}
