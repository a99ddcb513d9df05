use anyhow::bail;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use getset::CopyGetters;
use regex::Regex;
use std::fmt::{Display, Formatter};
use std::sync::LazyLock;
use tracing::debug;

pub const MESSAGE_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const CHART_LABEL_FORMAT: &str = "%Y-%m-%d";
pub const LABEL_SEPARATOR: &str = " To ";

const MESSAGE_LOOKBACK_DAYS: i64 = 3;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[- :]").expect("separator pattern is valid"));

/// Strips the `-`, ` ` and `:` separators of a formatted date-time.
pub fn compact(text: &str) -> String {
    SEPARATORS.replace_all(text, "").into_owned()
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + TimeDelta::days(1) - TimeDelta::seconds(1)
}

#[derive(Debug, CopyGetters, Copy, Clone, Eq, PartialEq)]
#[getset(get_copy = "pub")]
pub struct DateRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, anyhow::Error> {
        if start > end {
            bail!("Range start {start} is after range end {end}")
        }
        Ok(Self { start, end })
    }

    /// Three days back at day start up to the end of today.
    pub fn default_message_range(now: NaiveDateTime) -> Self {
        let today = now.date();
        Self {
            start: start_of_day(today - TimeDelta::days(MESSAGE_LOOKBACK_DAYS)),
            end: end_of_day(today),
        }
    }

    pub fn default_chart_range(now: NaiveDateTime) -> Self {
        Self {
            start: now,
            end: now,
        }
    }

    pub fn message_label(&self) -> String {
        format!(
            "{}{LABEL_SEPARATOR}{}",
            self.start.format(MESSAGE_LABEL_FORMAT),
            self.end.format(MESSAGE_LABEL_FORMAT)
        )
    }

    pub fn chart_label(&self) -> String {
        format!(
            "{}{LABEL_SEPARATOR}{}",
            self.start.format(CHART_LABEL_FORMAT),
            self.end.format(CHART_LABEL_FORMAT)
        )
    }

    /// Reads the message range back from its picker label, falling back to the default range.
    pub fn message_range_from_label(label: &str, now: NaiveDateTime) -> Self {
        match parse_label(label, |x| {
            NaiveDateTime::parse_from_str(x, MESSAGE_LABEL_FORMAT).ok()
        }) {
            Some(range) => range,
            None => {
                debug!("Message range label '{label}' can't be read, using default range");
                Self::default_message_range(now)
            }
        }
    }

    pub fn chart_range_from_label(label: &str, now: NaiveDateTime) -> Self {
        match parse_label(label, |x| {
            NaiveDate::parse_from_str(x, CHART_LABEL_FORMAT)
                .ok()
                .map(start_of_day)
        }) {
            Some(range) => range,
            None => {
                debug!("Chart range label '{label}' can't be read, using default range");
                Self::default_chart_range(now)
            }
        }
    }

    /// `stime`/`etime` of the message endpoint, e.g. `20240115093000`.
    pub fn compact_message_params(&self) -> (String, String) {
        (
            compact(&self.start.format(MESSAGE_LABEL_FORMAT).to_string()),
            compact(&self.end.format(MESSAGE_LABEL_FORMAT).to_string()),
        )
    }

    /// `stime`/`etime` of the producer chart endpoint, e.g. `20240115`.
    pub fn compact_chart_params(&self) -> (String, String) {
        (
            self.start.format(CHART_LABEL_FORMAT).to_string().replace('-', ""),
            self.end.format(CHART_LABEL_FORMAT).to_string().replace('-', ""),
        )
    }
}

fn parse_label(
    label: &str,
    parse: impl Fn(&str) -> Option<NaiveDateTime>,
) -> Option<DateRange> {
    let (start, end) = label.trim().split_once(LABEL_SEPARATOR)?;
    DateRange::new(parse(start.trim())?, parse(end.trim())?).ok()
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message_label())
    }
}

/// Quick ranges offered by both pickers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RangePreset {
    Today,
    Yesterday,
    Latest3Days,
    Latest7Days,
}

impl RangePreset {
    pub const ALL: [RangePreset; 4] = [
        RangePreset::Today,
        RangePreset::Yesterday,
        RangePreset::Latest3Days,
        RangePreset::Latest7Days,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RangePreset::Today => "Today",
            RangePreset::Yesterday => "Yesterday",
            RangePreset::Latest3Days => "Latest 3 days",
            RangePreset::Latest7Days => "Latest 7 days",
        }
    }

    fn days_back(&self) -> i64 {
        match self {
            RangePreset::Today => 0,
            RangePreset::Yesterday => 1,
            RangePreset::Latest3Days => 3,
            RangePreset::Latest7Days => 6,
        }
    }

    pub fn message_range(&self, now: NaiveDateTime) -> DateRange {
        let today = now.date();
        DateRange {
            start: start_of_day(today - TimeDelta::days(self.days_back())),
            end: end_of_day(today),
        }
    }

    pub fn chart_range(&self, now: NaiveDateTime) -> DateRange {
        DateRange {
            start: now - TimeDelta::days(self.days_back()),
            end: now,
        }
    }
}
