//! Sort stage: sortable fields, their accessors and the stable sort itself.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::RosterError;
use crate::record::UserRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// A column the table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    Email,
    Name,
    #[default]
    Created,
    Verified,
    ProfileComplete,
    LastActive,
}

/// Comparable value extracted from a record for one [`SortField`].
///
/// Only keys of the same field are ever compared with each other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    /// Lowercased text.
    Text(String),
    Time(DateTime<Utc>),
    /// `false` orders before `true`.
    Flag(bool),
}

impl SortField {
    pub const ALL: [Self; 6] = [
        Self::Email,
        Self::Name,
        Self::Created,
        Self::Verified,
        Self::ProfileComplete,
        Self::LastActive,
    ];

    /// Accessor mapping from field to record attribute.
    pub fn key(self, record: &UserRecord) -> SortKey {
        match self {
            Self::Email => SortKey::Text(record.email.to_lowercase()),
            Self::Name => SortKey::Text(record.display_name.to_lowercase()),
            Self::Created => SortKey::Time(record.created_at),
            Self::Verified => SortKey::Flag(record.email_verified),
            Self::ProfileComplete => SortKey::Flag(record.profile_complete),
            Self::LastActive => SortKey::Time(record.last_active),
        }
    }

    /// Stable identifier used by headers and command-line flags.
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Name => "name",
            Self::Created => "created",
            Self::Verified => "verified",
            Self::ProfileComplete => "profile",
            Self::LastActive => "active",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|field| field.as_key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Name => "Name",
            Self::Created => "Join Date",
            Self::Verified => "Verified",
            Self::ProfileComplete => "Profile Complete",
            Self::LastActive => "Last Active",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for SortField {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| RosterError::UnknownSortField(s.to_owned()))
    }
}

/// Field plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header-click semantics: same field flips, a new field starts ascending.
    #[must_use]
    pub fn toggled(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::new(field, SortDirection::Ascending)
        }
    }
}

/// Stable in-place sort; equal keys keep their relative order.
pub fn sort_view(view: &mut [&UserRecord], spec: SortSpec) {
    match spec.direction {
        SortDirection::Ascending => view.sort_by_cached_key(|record| spec.field.key(record)),
        SortDirection::Descending => {
            view.sort_by_cached_key(|record| Reverse(spec.field.key(record)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone as _};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn records() -> Vec<UserRecord> {
        vec![
            UserRecord::new("a", "zed@x.com", "bravo", base()).with_email_verified(true),
            UserRecord::new("b", "Amy@x.com", "Alpha", base() + Duration::days(2)),
            UserRecord::new("c", "mia@x.com", "charlie", base() - Duration::days(1))
                .with_email_verified(true),
            UserRecord::new("d", "bea@x.com", "Alpha", base() + Duration::days(1)),
        ]
    }

    fn ids(view: &[&UserRecord]) -> Vec<String> {
        view.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_strings_sort_case_insensitively() {
        let records = records();
        let mut view: Vec<&UserRecord> = records.iter().collect();
        sort_view(&mut view, SortSpec::new(SortField::Email, SortDirection::Ascending));
        assert_eq!(ids(&view), ["b", "d", "c", "a"]);
    }

    #[test]
    fn test_timestamps_sort_chronologically() {
        let records = records();
        let mut view: Vec<&UserRecord> = records.iter().collect();
        sort_view(&mut view, SortSpec::new(SortField::Created, SortDirection::Descending));
        assert_eq!(ids(&view), ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_ties_keep_prior_order_in_both_directions() {
        let records = records();
        let mut view: Vec<&UserRecord> = records.iter().collect();
        sort_view(&mut view, SortSpec::new(SortField::Name, SortDirection::Ascending));
        assert_eq!(ids(&view), ["b", "d", "a", "c"]);

        let mut view: Vec<&UserRecord> = records.iter().collect();
        sort_view(&mut view, SortSpec::new(SortField::Verified, SortDirection::Descending));
        assert_eq!(ids(&view), ["a", "c", "b", "d"]);

        let mut view: Vec<&UserRecord> = records.iter().collect();
        sort_view(&mut view, SortSpec::new(SortField::Verified, SortDirection::Ascending));
        assert_eq!(ids(&view), ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_toggle_same_field_twice_restores_direction() {
        let spec = SortSpec::new(SortField::Email, SortDirection::Ascending);
        let once = spec.toggled(SortField::Email);
        assert_eq!(once.direction, SortDirection::Descending);
        assert_eq!(once.toggled(SortField::Email), spec);
    }

    #[test]
    fn test_toggle_new_field_resets_to_ascending() {
        let spec = SortSpec::new(SortField::Email, SortDirection::Descending);
        assert_eq!(
            spec.toggled(SortField::Verified),
            SortSpec::new(SortField::Verified, SortDirection::Ascending)
        );
    }

    #[test]
    fn test_default_spec_is_newest_first() {
        assert_eq!(
            SortSpec::default(),
            SortSpec::new(SortField::Created, SortDirection::Descending)
        );
    }

    #[test]
    fn test_field_keys_round_trip_through_from_str() {
        for field in SortField::ALL {
            assert_eq!(field.as_key().parse::<SortField>(), Ok(field));
        }
        assert_eq!(SortField::from_key(" Email "), Some(SortField::Email));
        assert_eq!(
            "joined".parse::<SortField>(),
            Err(RosterError::UnknownSortField("joined".to_owned()))
        );
    }
}
