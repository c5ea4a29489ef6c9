use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

use crate::config::RemoteConfig;
use crate::listing::Listing;
use crate::models::{AppointmentFilter, PatientFilter, View};
use crate::store::DomainStore;

use super::appointments::{self, AppointmentRow};
use super::dashboard;
use super::departments;
use super::doctors;
use super::patients::{self, PatientRow};
use super::schedule;
use super::search;
use super::settings::StorageStatus;
use super::ViewContent;

/// A view that was just made active.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShownView {
    pub view: View,
    pub title: &'static str,
    /// The single container that carries the `active` class.
    pub container_id: String,
    #[serde(flatten)]
    pub content: ViewContent,
}

/// Outcome of the header search box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub patient_id: Option<i64>,
    /// Set when the search switched to the patients view.
    pub shown: Option<ShownView>,
}

/// Current view plus the filter each table was last rendered with.
#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    current: View,
    patient_filter: PatientFilter,
    appointment_filter: AppointmentFilter,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn patient_filter(&self) -> &PatientFilter {
        &self.patient_filter
    }

    pub fn appointment_filter(&self) -> &AppointmentFilter {
        &self.appointment_filter
    }

    /// Make `view` current and produce its content. Entering the dashboard
    /// recomputes analytics first; the tables restart on page 1 with their
    /// last filter.
    pub fn show<R: Rng>(
        &mut self,
        view: View,
        store: &mut DomainStore,
        config: &RemoteConfig,
        today: NaiveDate,
        rng: &mut R,
    ) -> ShownView {
        self.current = view;
        tracing::debug!(%view, "View shown");

        let content = match view {
            View::Dashboard => {
                store.update_analytics();
                ViewContent::Dashboard(dashboard::build(store, today))
            }
            View::Patients => {
                ViewContent::Patients(patients::render(store, &self.patient_filter, 1))
            }
            View::Appointments => {
                ViewContent::Appointments(appointments::render(
                    store,
                    &self.appointment_filter,
                    1,
                ))
            }
            View::Doctors => ViewContent::Doctors(doctors::render(store, today)),
            View::Departments => ViewContent::Departments(departments::render(store, rng)),
            View::Schedule => ViewContent::Schedule(schedule::build(&store.doctors, rng)),
            View::Settings => ViewContent::Settings(StorageStatus::from_config(config)),
        };

        ShownView {
            view,
            title: view.title(),
            container_id: view.container_id(),
            content,
        }
    }

    /// Render the patients table and remember the filter for later re-shows.
    pub fn render_patients(
        &mut self,
        store: &DomainStore,
        filter: PatientFilter,
        page: usize,
    ) -> Listing<PatientRow> {
        self.patient_filter = filter;
        patients::render(store, &self.patient_filter, page)
    }

    pub fn render_appointments(
        &mut self,
        store: &DomainStore,
        filter: AppointmentFilter,
        page: usize,
    ) -> Listing<AppointmentRow> {
        self.appointment_filter = filter;
        appointments::render(store, &self.appointment_filter, page)
    }

    /// Find a patient by name; when one matches and the patients view is
    /// not already showing, switch to it with `term` as the search.
    pub fn global_search<R: Rng>(
        &mut self,
        term: &str,
        store: &mut DomainStore,
        config: &RemoteConfig,
        today: NaiveDate,
        rng: &mut R,
    ) -> SearchOutcome {
        let patient_id = search::find_patient(store, term).map(|p| p.patient_id);
        let shown = match patient_id {
            Some(_) if self.current != View::Patients => {
                self.patient_filter = PatientFilter {
                    search: Some(term.trim().to_lowercase()),
                    status: None,
                };
                Some(self.show(View::Patients, store, config, today, rng))
            }
            _ => None,
        };
        SearchOutcome { patient_id, shown }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn show(router: &mut ViewRouter, store: &mut DomainStore, view: View) -> ShownView {
        let mut rng = StdRng::seed_from_u64(9);
        router.show(view, store, &RemoteConfig::default(), today(), &mut rng)
    }

    #[test]
    fn starts_on_dashboard() {
        assert_eq!(ViewRouter::new().current(), View::Dashboard);
    }

    #[test]
    fn every_view_dispatches_to_its_content() {
        let mut router = ViewRouter::new();
        let mut store = sample_store();
        for view in View::ALL {
            let shown = show(&mut router, &mut store, view);
            assert_eq!(router.current(), view);
            assert_eq!(shown.view, view);
            assert_eq!(shown.container_id, format!("{}View", view.as_str()));
            let matched = matches!(
                (view, &shown.content),
                (View::Dashboard, ViewContent::Dashboard(_))
                    | (View::Patients, ViewContent::Patients(_))
                    | (View::Appointments, ViewContent::Appointments(_))
                    | (View::Doctors, ViewContent::Doctors(_))
                    | (View::Departments, ViewContent::Departments(_))
                    | (View::Schedule, ViewContent::Schedule(_))
                    | (View::Settings, ViewContent::Settings(_))
            );
            assert!(matched, "{view} rendered the wrong content");
        }
    }

    #[test]
    fn dashboard_entry_recomputes_analytics() {
        let mut router = ViewRouter::new();
        let mut store = sample_store();
        assert_eq!(store.analytics.patient_age_distribution.total(), 0);
        show(&mut router, &mut store, View::Dashboard);
        assert_eq!(store.analytics.patient_age_distribution.total(), 3);
    }

    #[test]
    fn reshow_keeps_last_patient_query() {
        let mut router = ViewRouter::new();
        let mut store = sample_store();
        let filter = PatientFilter {
            search: Some("hopper".into()),
            status: None,
        };
        router.render_patients(&store, filter, 1);

        let shown = show(&mut router, &mut store, View::Patients);
        let ViewContent::Patients(listing) = shown.content else {
            panic!("expected patients");
        };
        assert_eq!(listing.total_items(), 1);
    }

    #[test]
    fn reshow_after_shrink_restarts_on_first_page() {
        let mut router = ViewRouter::new();
        let mut store = sample_store();
        store.patients = (1..=25).map(|id| patient(id, "Pat", "Doe", 30)).collect();
        let listing = router.render_patients(&store, PatientFilter::default(), 3);
        assert_eq!(listing.rows().len(), 5);

        store.patients.truncate(5);
        let shown = show(&mut router, &mut store, View::Patients);
        let ViewContent::Patients(Listing::Rows { page, pagination }) = shown.content else {
            panic!("expected patient rows");
        };
        assert_eq!(page.page, 1);
        assert_eq!(page.rows.len(), 5);
        assert_eq!(pagination.total_pages, 1);
    }

    #[test]
    fn appointments_reshow_restarts_on_first_page() {
        let mut router = ViewRouter::new();
        let mut store = sample_store();
        router.render_appointments(&store, AppointmentFilter::default(), 4);

        let shown = show(&mut router, &mut store, View::Appointments);
        let ViewContent::Appointments(listing) = shown.content else {
            panic!("expected appointments");
        };
        assert_eq!(listing.rows().len(), 3);
    }

    #[test]
    fn global_search_navigates_to_patients() {
        let mut router = ViewRouter::new();
        let mut store = sample_store();
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = router.global_search(
            "Turing",
            &mut store,
            &RemoteConfig::default(),
            today(),
            &mut rng,
        );
        assert_eq!(outcome.patient_id, Some(3));
        assert_eq!(router.current(), View::Patients);
        assert_eq!(router.patient_filter().search.as_deref(), Some("turing"));
        let shown = outcome.shown.unwrap();
        let ViewContent::Patients(listing) = shown.content else {
            panic!("expected patients");
        };
        assert_eq!(listing.rows()[0].patient_id, 3);
    }

    #[test]
    fn global_search_stays_put_when_already_on_patients_or_no_match() {
        let mut router = ViewRouter::new();
        let mut store = sample_store();
        let mut rng = StdRng::seed_from_u64(1);
        let config = RemoteConfig::default();

        let outcome = router.global_search("zzz", &mut store, &config, today(), &mut rng);
        assert_eq!(outcome.patient_id, None);
        assert_eq!(router.current(), View::Dashboard);

        show(&mut router, &mut store, View::Patients);
        let outcome = router.global_search("ada", &mut store, &config, today(), &mut rng);
        assert_eq!(outcome.patient_id, Some(1));
        assert!(outcome.shown.is_none());
        assert_eq!(router.patient_filter().search, None);
    }

    #[test]
    fn shown_view_serializes_flat() {
        let mut router = ViewRouter::new();
        let mut store = sample_store();
        let shown = show(&mut router, &mut store, View::Settings);
        let json = serde_json::to_value(&shown).unwrap();
        assert_eq!(json["view"], "settings");
        assert_eq!(json["title"], "Settings");
        assert_eq!(json["kind"], "settings");
        assert_eq!(json["content"]["badge"], "Not Configured");
    }
}
