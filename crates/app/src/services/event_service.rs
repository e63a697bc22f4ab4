//! Event service — use-cases for listing and submitting events.

use chrono::NaiveDate;

use mycommunity_domain::error::MyCommunityError;
use mycommunity_domain::event::Event;
use mycommunity_domain::submission::RawSubmission;
use mycommunity_domain::time;

use crate::ports::EventRegistry;

/// Application service in front of an [`EventRegistry`].
///
/// This is the only path from a [`RawSubmission`] to
/// [`EventRegistry::append`]: every submission is validated first.
pub struct EventService<R> {
    registry: R,
    today: fn() -> NaiveDate,
}

impl<R: EventRegistry> EventService<R> {
    /// Create a new service backed by the given registry.
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            today: time::today,
        }
    }

    /// Replace the clock used for the "not in the past" date rule.
    #[must_use]
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// List every registered event, in submission order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the registry.
    pub async fn list_events(&self) -> Result<Vec<Event>, MyCommunityError> {
        self.registry.list().await
    }

    /// Validate a raw submission and append it to the registry.
    ///
    /// # Errors
    ///
    /// Returns [`MyCommunityError::Validation`] listing every violated field,
    /// or a storage error propagated from the registry.
    pub async fn submit(&self, raw: RawSubmission) -> Result<Event, MyCommunityError> {
        let event = raw.validate((self.today)()).inspect_err(|errors| {
            tracing::debug!(violations = errors.len(), %errors, "rejected event submission");
        })?;

        self.registry.append(event.clone()).await?;
        tracing::info!(
            name = event.name(),
            date = %event.date(),
            category = %event.category(),
            "registered event"
        );
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mycommunity_domain::error::{BoxError, Field};
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryRegistry {
        store: Mutex<Vec<Event>>,
    }

    impl EventRegistry for InMemoryRegistry {
        fn list(&self) -> impl Future<Output = Result<Vec<Event>, MyCommunityError>> + Send {
            let result = self.store.lock().unwrap().clone();
            async { Ok(result) }
        }

        fn append(&self, event: Event) -> impl Future<Output = Result<(), MyCommunityError>> + Send {
            self.store.lock().unwrap().push(event);
            async { Ok(()) }
        }
    }

    struct FailingRegistry;

    impl EventRegistry for FailingRegistry {
        async fn list(&self) -> Result<Vec<Event>, MyCommunityError> {
            Err(MyCommunityError::StoreCorrupted(BoxError::from("garbage")))
        }

        async fn append(&self, _event: Event) -> Result<(), MyCommunityError> {
            Err(MyCommunityError::StoreWriteFailed(BoxError::from("disk full")))
        }
    }

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2031, 3, 10).unwrap()
    }

    fn make_service() -> EventService<InMemoryRegistry> {
        EventService::new(InMemoryRegistry::default()).with_today(fixed_today)
    }

    fn submission(name: &str) -> RawSubmission {
        RawSubmission {
            name: name.into(),
            description: "Una tarde de juegos de mesa para todas las edades".into(),
            date: "2031-03-12".into(),
            time: "17:30".into(),
            location: "Biblioteca Municipal".into(),
            address: "Av. Libertad 45".into(),
            organizer: "Club Ludico".into(),
            contact_email: "club@ludico.org".into(),
            contact_phone: "600123456".into(),
            category: "social".into(),
            capacity: "40".into(),
            free: true.into(),
            ..RawSubmission::default()
        }
    }

    #[tokio::test]
    async fn should_return_empty_list_when_nothing_submitted() {
        let svc = make_service();
        assert!(svc.list_events().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_append_valid_submission() {
        let svc = make_service();

        let event = svc.submit(submission("Juegos de mesa")).await.unwrap();
        assert_eq!(event.name(), "Juegos de mesa");

        let all = svc.list_events().await.unwrap();
        assert_eq!(all, vec![event]);
    }

    #[tokio::test]
    async fn should_not_persist_invalid_submission() {
        let svc = make_service();
        let raw = RawSubmission {
            time: "25:00".into(),
            contact_phone: "123".into(),
            ..submission("Juegos de mesa")
        };

        let result = svc.submit(raw).await;
        assert!(matches!(
            result,
            Err(MyCommunityError::Validation(ref errors))
                if errors.contains(Field::Time) && errors.contains(Field::ContactPhone)
        ));
        assert!(svc.list_events().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_apply_injected_clock_to_date_rule() {
        let svc = make_service();
        let raw = RawSubmission {
            date: "2031-03-09".into(),
            ..submission("Juegos de mesa")
        };

        let result = svc.submit(raw).await;
        assert!(matches!(
            result,
            Err(MyCommunityError::Validation(ref errors)) if errors.contains(Field::Date)
        ));
    }

    #[tokio::test]
    async fn should_keep_submission_order_and_allow_duplicates() {
        let svc = make_service();
        svc.submit(submission("Primera cita")).await.unwrap();
        svc.submit(submission("Segunda cita")).await.unwrap();
        svc.submit(submission("Primera cita")).await.unwrap();

        let names: Vec<String> = svc
            .list_events()
            .await
            .unwrap()
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(names, ["Primera cita", "Segunda cita", "Primera cita"]);
    }

    #[tokio::test]
    async fn should_propagate_storage_errors() {
        let svc = EventService::new(FailingRegistry).with_today(fixed_today);

        assert!(matches!(
            svc.list_events().await,
            Err(MyCommunityError::StoreCorrupted(_))
        ));
        assert!(matches!(
            svc.submit(submission("Juegos de mesa")).await,
            Err(MyCommunityError::StoreWriteFailed(_))
        ));
    }
}
