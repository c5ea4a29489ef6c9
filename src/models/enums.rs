use serde::{Deserialize, Serialize};

/// Failed to parse a string into one of the dashboard enums.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field}: {value}")]
pub struct ParseEnumError {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ParseEnumError {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(Collection {
    Patients => "patients",
    Doctors => "doctors",
    Appointments => "appointments",
    Departments => "departments",
});

impl Collection {
    /// Sheet name used by the remote spreadsheet.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Self::Patients => "Patients",
            Self::Doctors => "Doctors",
            Self::Appointments => "Appointments",
            Self::Departments => "Departments",
        }
    }
}

str_enum!(WriteAction {
    Add => "add",
});

str_enum!(SortOrder {
    Asc => "asc",
    Desc => "desc",
});

str_enum!(NotificationKind {
    Success => "success",
    Error => "error",
    Warning => "warning",
    Info => "info",
});

str_enum!(View {
    Dashboard => "dashboard",
    Patients => "patients",
    Appointments => "appointments",
    Doctors => "doctors",
    Departments => "departments",
    Schedule => "schedule",
    Settings => "settings",
});

impl Default for View {
    fn default() -> Self {
        View::Dashboard
    }
}

impl View {
    pub const ALL: [View; 7] = [
        View::Dashboard,
        View::Patients,
        View::Appointments,
        View::Doctors,
        View::Departments,
        View::Schedule,
        View::Settings,
    ];

    /// Page title shown in the header.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Patients => "Patients",
            Self::Appointments => "Appointments",
            Self::Doctors => "Doctors",
            Self::Departments => "Departments",
            Self::Schedule => "Schedule",
            Self::Settings => "Settings",
        }
    }

    /// DOM id of the view's container, e.g. `patientsView`.
    pub fn container_id(&self) -> String {
        format!("{}View", self.as_str())
    }
}

/// Patient gender as recorded by the intake form.
///
/// Anything other than `M` or `F` is kept as `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Other => "Other",
        }
    }

    /// Human-readable label shown in tables and the detail panel.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        match s.trim() {
            "M" => Self::Male,
            "F" => Self::Female,
            _ => Self::Other,
        }
    }
}

impl From<Gender> for String {
    fn from(g: Gender) -> Self {
        g.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn collection_round_trip() {
        for (variant, s) in [
            (Collection::Patients, "patients"),
            (Collection::Doctors, "doctors"),
            (Collection::Appointments, "appointments"),
            (Collection::Departments, "departments"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(Collection::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn collection_sheet_names_are_capitalized() {
        assert_eq!(Collection::Patients.sheet_name(), "Patients");
        assert_eq!(Collection::Appointments.sheet_name(), "Appointments");
    }

    #[test]
    fn unknown_value_reports_field() {
        let err = SortOrder::from_str("sideways").unwrap_err();
        assert_eq!(err.field, "SortOrder");
        assert_eq!(err.to_string(), "Invalid SortOrder: sideways");
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&NotificationKind::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let kind: Collection = serde_json::from_str("\"appointments\"").unwrap();
        assert_eq!(kind, Collection::Appointments);
    }

    #[test]
    fn view_titles_and_containers() {
        for view in View::ALL {
            assert_eq!(View::from_str(view.as_str()).unwrap(), view);
        }
        assert_eq!(View::Schedule.title(), "Schedule");
        assert_eq!(View::Patients.container_id(), "patientsView");
        assert!(View::from_str("billing").is_err());
    }

    #[test]
    fn gender_parses_leniently() {
        let g: Gender = serde_json::from_str("\"M\"").unwrap();
        assert_eq!(g, Gender::Male);
        let g: Gender = serde_json::from_str("\"F\"").unwrap();
        assert_eq!(g.label(), "Female");
        let g: Gender = serde_json::from_str("\"Non-binary\"").unwrap();
        assert_eq!(g, Gender::Other);
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"M\"");
    }
}
