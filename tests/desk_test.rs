//! Dashboard model behaviour driven through the effect driver
//!
//! Timers are advanced with explicit instants and requests go to an in-memory
//! `FakeApi`, so every property here is checked without sleeping.

mod common;

use std::time::{Duration, Instant};

use common::fake_api::{Call, FakeApi};
use common::mock_data::{TicketBuilder, mock_stats, mock_ticket};
use helpdesk::api::TicketQuery;
use helpdesk::config::Timing;
use helpdesk::desk::{
    Action, CREATE_FAILED, DeskModel, Effect, FieldUpdate, FilterUpdate, LOAD_FAILED, Outcome,
    STATUS_UPDATE_FAILED, StatsView, run_effect, settle,
};
use helpdesk::error::HelpdeskError;
use helpdesk::types::{
    Classification, TicketCategory, TicketId, TicketPriority, TicketStatus,
};

const CLASSIFY: Duration = Duration::from_millis(1000);
const SEARCH: Duration = Duration::from_millis(500);

fn timing() -> Timing {
    Timing {
        classify_debounce: CLASSIFY,
        search_debounce: SEARCH,
    }
}

/// A model that has finished its initial list and stats fetches
async fn mounted(api: &FakeApi) -> DeskModel {
    let mut model = DeskModel::new(timing());
    let effects = model.mount();
    settle(api, &mut model, effects).await;
    api.clear_calls();
    model
}

async fn act(api: &FakeApi, model: &mut DeskModel, action: Action, now: Instant) {
    let effects = model.handle(action, now);
    settle(api, model, effects).await;
}

async fn tick(api: &FakeApi, model: &mut DeskModel, now: Instant) {
    let effects = model.tick(now);
    settle(api, model, effects).await;
}

fn type_description(text: &str) -> Action {
    Action::EditField(FieldUpdate::Description(text.to_string()))
}

// ============================================================================
// Debounced classification
// ============================================================================

#[tokio::test]
async fn test_one_classification_per_quiet_period() {
    let api = FakeApi::new();
    let mut model = mounted(&api).await;
    let start = Instant::now();

    // Keystrokes 300ms apart keep resetting the window
    let mut text = String::new();
    for (i, ch) in "vpn".chars().enumerate() {
        text.push(ch);
        let at = start + Duration::from_millis(300 * i as u64);
        act(&api, &mut model, type_description(&text), at).await;
        tick(&api, &mut model, at + Duration::from_millis(299)).await;
    }
    assert!(api.classify_calls().is_empty());

    let last = start + Duration::from_millis(600);
    tick(&api, &mut model, last + CLASSIFY - Duration::from_millis(1)).await;
    assert!(api.classify_calls().is_empty());

    tick(&api, &mut model, last + CLASSIFY).await;
    tick(&api, &mut model, last + CLASSIFY * 3).await;
    assert_eq!(api.classify_calls(), vec!["vpn".to_string()]);
}

#[tokio::test]
async fn test_classification_fills_category_and_priority() {
    let api = FakeApi::new();
    api.push_classify(Ok(Classification {
        suggested_category: Some("billing".to_string()),
        suggested_priority: Some("high".to_string()),
    }));
    let mut model = mounted(&api).await;
    let now = Instant::now();

    act(&api, &mut model, type_description("charged twice"), now).await;
    tick(&api, &mut model, now + CLASSIFY).await;

    assert_eq!(model.form.category(), TicketCategory::Billing);
    assert_eq!(model.form.priority(), TicketPriority::High);
    assert!(!model.form.is_classifying());
}

#[tokio::test]
async fn test_classification_failure_is_silent() {
    let api = FakeApi::new();
    api.push_classify(Err(HelpdeskError::Other("classifier down".into())));
    let mut model = mounted(&api).await;
    let now = Instant::now();

    act(&api, &mut model, type_description("printer jam"), now).await;
    tick(&api, &mut model, now + CLASSIFY).await;

    assert_eq!(api.classify_calls().len(), 1);
    assert_eq!(model.form.error(), None);
    assert_eq!(model.form.category(), TicketCategory::General);
}

#[tokio::test]
async fn test_stale_classification_is_discarded() {
    let api = FakeApi::new();
    let mut model = mounted(&api).await;
    let now = Instant::now();

    model.handle(type_description("first"), now);
    let Some(Effect::Classify { token: first, .. }) = model.tick(now + CLASSIFY).pop() else {
        panic!("expected a classify request");
    };
    let later = now + CLASSIFY * 2;
    model.handle(type_description("second"), later);
    let Some(Effect::Classify { token: second, .. }) = model.tick(later + CLASSIFY).pop() else {
        panic!("expected a classify request");
    };

    model.apply(Outcome::Classified {
        token: second,
        result: Ok(Classification {
            suggested_category: Some("account".into()),
            suggested_priority: None,
        }),
    });
    model.apply(Outcome::Classified {
        token: first,
        result: Ok(Classification {
            suggested_category: Some("billing".into()),
            suggested_priority: None,
        }),
    });
    assert_eq!(model.form.category(), TicketCategory::Account);
}

// ============================================================================
// Debounced search
// ============================================================================

#[tokio::test]
async fn test_search_applies_once_per_quiet_period() {
    let api = FakeApi::new();
    let mut model = mounted(&api).await;
    let start = Instant::now();

    for (i, text) in ["r", "re", "ref"].iter().enumerate() {
        let at = start + Duration::from_millis(100 * i as u64);
        act(&api, &mut model, Action::SearchInput(text.to_string()), at).await;
        tick(&api, &mut model, at + Duration::from_millis(99)).await;
    }
    assert_eq!(api.list_calls(), 0);
    assert_eq!(model.list.filters().search, None);

    let last = start + Duration::from_millis(200);
    tick(&api, &mut model, last + SEARCH).await;
    tick(&api, &mut model, last + SEARCH * 4).await;

    assert_eq!(api.list_calls(), 1);
    assert_eq!(model.list.filters().search.as_deref(), Some("ref"));
    assert_eq!(
        api.calls(),
        vec![Call::List(TicketQuery {
            search: Some("ref".to_string()),
            ..TicketQuery::new()
        })]
    );
}

// ============================================================================
// Filters
// ============================================================================

#[tokio::test]
async fn test_filter_query_omits_cleared_fields() {
    let api = FakeApi::new();
    let mut model = mounted(&api).await;
    let now = Instant::now();

    act(
        &api,
        &mut model,
        Action::SetFilter(FilterUpdate::Priority(Some(TicketPriority::Low))),
        now,
    )
    .await;
    act(
        &api,
        &mut model,
        Action::SetFilter(FilterUpdate::Category(Some(TicketCategory::Billing))),
        now,
    )
    .await;
    act(
        &api,
        &mut model,
        Action::SetFilter(FilterUpdate::Priority(None)),
        now,
    )
    .await;

    let Some(Call::List(query)) = api.calls().pop() else {
        panic!("expected a list request");
    };
    assert_eq!(
        query.to_pairs(),
        vec![("category", "billing".to_string())]
    );
}

#[tokio::test]
async fn test_filters_narrow_list() {
    let api = FakeApi::with_tickets(vec![
        TicketBuilder::new("1").category(TicketCategory::Billing).build(),
        TicketBuilder::new("2").category(TicketCategory::Account).build(),
    ]);
    let mut model = mounted(&api).await;
    assert_eq!(model.list.cards().len(), 2);

    act(
        &api,
        &mut model,
        Action::SetFilter(FilterUpdate::Category(Some(TicketCategory::Account))),
        Instant::now(),
    )
    .await;
    assert_eq!(model.list.cards().len(), 1);
    assert_eq!(model.list.cards()[0].id().as_str(), "2");
    assert_eq!(model.list.count_label().as_deref(), Some("1 ticket"));
}

#[tokio::test]
async fn test_failed_list_fetch_shows_generic_error() {
    let api = FakeApi::new();
    api.push_list(Err(HelpdeskError::Other("boom".into())));
    let mut model = DeskModel::new(timing());
    let effects = model.mount();
    settle(&api, &mut model, effects).await;

    assert_eq!(model.list.error(), Some(LOAD_FAILED));
    assert!(!model.list.is_loading());
}

// ============================================================================
// Creating tickets
// ============================================================================

#[tokio::test]
async fn test_submit_creates_and_clears_form() {
    let api = FakeApi::new();
    let mut model = mounted(&api).await;
    let now = Instant::now();

    act(&api, &mut model, Action::EditField(FieldUpdate::Title("Refund".into())), now).await;
    act(&api, &mut model, type_description("Charged twice"), now).await;
    act(
        &api,
        &mut model,
        Action::EditField(FieldUpdate::Category(TicketCategory::Billing)),
        now,
    )
    .await;
    act(&api, &mut model, Action::SubmitForm, now).await;

    let created = model.take_created().expect("creation reported");
    assert_eq!(created.title, "Refund");
    assert_eq!(created.category, TicketCategory::Billing);

    assert!(model.form.is_blank());
    assert_eq!(model.form.title(), "");
    assert_eq!(model.form.description(), "");
    assert_eq!(model.form.category(), TicketCategory::General);
    assert_eq!(model.form.priority(), TicketPriority::Medium);

    // The submit cancelled nothing it shouldn't: no classification is still pending
    assert_eq!(model.next_deadline(), None);
    assert_eq!(model.list.cards()[0].id(), &created.id);
}

#[tokio::test]
async fn test_validation_error_keeps_draft() {
    let api = FakeApi::new();
    api.push_create(Err(HelpdeskError::Validation(
        serde_json::from_str(r#"{"title": ["too long"]}"#).unwrap(),
    )));
    let mut model = mounted(&api).await;
    let now = Instant::now();

    act(&api, &mut model, Action::EditField(FieldUpdate::Title("Long".into())), now).await;
    act(&api, &mut model, type_description("Body"), now).await;
    act(&api, &mut model, Action::SubmitForm, now).await;

    assert_eq!(model.form.error(), Some("title: too long"));
    assert_eq!(model.form.title(), "Long");
    assert_eq!(model.form.description(), "Body");
    assert!(!model.form.is_submitting());
    assert!(model.take_created().is_none());
    assert_eq!(model.refresh_count(), 0);
}

#[tokio::test]
async fn test_other_create_failure_is_generic() {
    let api = FakeApi::new();
    api.push_create(Err(HelpdeskError::Other("timeout".into())));
    let mut model = mounted(&api).await;
    let now = Instant::now();

    act(&api, &mut model, Action::EditField(FieldUpdate::Title("T".into())), now).await;
    act(&api, &mut model, type_description("D"), now).await;
    act(&api, &mut model, Action::SubmitForm, now).await;

    assert_eq!(model.form.error(), Some(CREATE_FAILED));
    assert_eq!(model.form.title(), "T");
}

#[tokio::test]
async fn test_blank_submit_sends_nothing() {
    let api = FakeApi::new();
    let mut model = mounted(&api).await;

    act(&api, &mut model, Action::SubmitForm, Instant::now()).await;

    assert!(api.calls().is_empty());
    assert!(model.form.error().is_some());
}

// ============================================================================
// Refresh protocol
// ============================================================================

#[tokio::test]
async fn test_creation_refetches_list_and_stats_once() {
    let api = FakeApi::new();
    let mut model = mounted(&api).await;
    let now = Instant::now();

    // A filter and a pending search do not change what the refresh sends
    act(
        &api,
        &mut model,
        Action::SetFilter(FilterUpdate::Status(Some(TicketStatus::Open))),
        now,
    )
    .await;
    model.handle(Action::SearchInput("zzz".into()), now);
    api.clear_calls();

    act(&api, &mut model, Action::EditField(FieldUpdate::Title("T".into())), now).await;
    act(&api, &mut model, type_description("D"), now).await;
    act(&api, &mut model, Action::SubmitForm, now).await;

    assert_eq!(model.refresh_count(), 1);
    assert_eq!(api.count(|c| matches!(c, Call::Create(_))), 1);
    assert_eq!(api.list_calls(), 1);
    assert_eq!(api.stats_calls(), 1);
}

#[tokio::test]
async fn test_refresh_fetch_ignores_loading_state() {
    let api = FakeApi::new();
    let mut model = mounted(&api).await;
    let now = Instant::now();

    // A list fetch is still in flight when the ticket is created
    let pending = model.handle(
        Action::SetFilter(FilterUpdate::Category(Some(TicketCategory::Account))),
        now,
    );
    assert!(model.list.is_loading());

    model.handle(Action::EditField(FieldUpdate::Title("T".into())), now);
    model.handle(type_description("D"), now);
    let submit = model.handle(Action::SubmitForm, now);
    let [create] = submit.as_slice() else {
        panic!("expected one create request");
    };
    let outcome = run_effect(&api, create.clone()).await;
    let follow_up = model.apply(outcome);

    assert_eq!(follow_up.len(), 2);
    assert!(matches!(follow_up[0], Effect::FetchTickets { .. }));
    assert!(matches!(follow_up[1], Effect::FetchStats { .. }));

    // The superseded fetch lands late and is ignored
    for effect in pending {
        if let Effect::FetchTickets { token, .. } = effect {
            model.apply(Outcome::TicketsFetched {
                token,
                result: Ok(vec![mock_ticket("old", TicketStatus::Open)]),
            });
        }
    }
    assert!(model.list.is_loading());
    assert!(model.list.card(&TicketId::new("old")).is_none());
}

#[tokio::test]
async fn test_stats_panel_states() {
    let api = FakeApi::new();
    api.push_stats(Ok(mock_stats(10, 4)));
    let mut model = DeskModel::new(timing());
    let effects = model.mount();
    assert_eq!(model.stats.view(), &StatsView::Loading);

    settle(&api, &mut model, effects).await;
    assert_eq!(model.stats.stats().map(|s| s.total_tickets), Some(10));

    api.push_stats(Err(HelpdeskError::Other("down".into())));
    act(&api, &mut model, Action::Refresh, Instant::now()).await;
    assert!(matches!(model.stats.view(), StatsView::Error(_)));
}

// ============================================================================
// Optimistic status changes
// ============================================================================

#[tokio::test]
async fn test_rejected_status_change_rolls_back_that_card() {
    let api = FakeApi::with_tickets(vec![
        mock_ticket("1", TicketStatus::Open),
        mock_ticket("2", TicketStatus::Open),
    ]);
    api.push_update(Err(HelpdeskError::Other("nope".into())));
    let mut model = mounted(&api).await;
    let id = TicketId::new("2");

    let effects = model.handle(
        Action::ChangeStatus {
            id: id.clone(),
            status: TicketStatus::Resolved,
        },
        Instant::now(),
    );
    // Shown immediately, before the service answers
    let card = model.list.card(&id).unwrap();
    assert_eq!(card.status(), TicketStatus::Resolved);
    assert!(card.is_updating());

    settle(&api, &mut model, effects).await;

    let card = model.list.card(&id).unwrap();
    assert_eq!(card.status(), TicketStatus::Open);
    assert_eq!(card.error(), Some(STATUS_UPDATE_FAILED));
    assert!(!card.is_updating());

    let other = model.list.card(&TicketId::new("1")).unwrap();
    assert_eq!(other.error(), None);
    assert_eq!(api.list_calls(), 0);
}

#[tokio::test]
async fn test_accepted_status_change_refetches_list() {
    let api = FakeApi::with_tickets(vec![mock_ticket("1", TicketStatus::Open)]);
    let mut model = mounted(&api).await;
    let id = TicketId::new("1");

    act(
        &api,
        &mut model,
        Action::ChangeStatus {
            id: id.clone(),
            status: TicketStatus::Closed,
        },
        Instant::now(),
    )
    .await;

    assert_eq!(api.list_calls(), 1);
    assert_eq!(api.stats_calls(), 0);
    let card = model.list.card(&id).unwrap();
    assert_eq!(card.status(), TicketStatus::Closed);
    assert_eq!(card.error(), None);
}
