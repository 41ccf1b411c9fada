use foresight_core::config::SchedulerConfig;
use foresight_core::models::{
    AccuracyMetric, DetailItem, Destination, ElementRect, FormElement, LinkElement, MediaElement,
    MediaKind, PageSnapshot, ResourcePriority, VisibleElement,
};
use foresight_core::{ActionKind, ActionStatus, BehaviorCategory, Eagerness, Prediction};
use foresight_scheduler::{ActionRegistry, ExternalHint, SpeculativeScheduler};

fn scheduler() -> SpeculativeScheduler {
    SpeculativeScheduler::new(SchedulerConfig::default(), ActionRegistry::new())
}

fn on_screen() -> ElementRect {
    ElementRect::new(10.0, 10.0, 50.0, 20.0)
}

fn nav_link(href: &str) -> LinkElement {
    LinkElement {
        href: href.to_string(),
        same_origin: true,
        in_nav: true,
        recently_hovered: false,
        rect: on_screen(),
    }
}

fn page() -> PageSnapshot {
    PageSnapshot {
        viewport_width: 1024.0,
        viewport_height: 768.0,
        ..PageSnapshot::default()
    }
}

fn keys(actions: &[foresight_core::SpeculativeAction]) -> Vec<&str> {
    actions.iter().map(|a| a.resource_key.as_str()).collect()
}

#[test]
fn navigation_prerenders_top_links() {
    let mut page = page();
    page.links = vec![
        nav_link("/a"),
        nav_link("/products/1"),
        nav_link("/b"),
        nav_link("/c"),
        LinkElement {
            same_origin: false,
            ..nav_link("https://elsewhere.example/x")
        },
    ];
    let actions = scheduler().schedule(
        &[Prediction::new(BehaviorCategory::Navigation, 0.85)],
        &page,
        &AccuracyMetric::new(),
        0,
    );

    assert_eq!(keys(&actions), vec!["/products/1", "/a", "/b"]);
    for action in &actions {
        assert_eq!(action.kind, ActionKind::Prerender);
        assert_eq!(action.eagerness, Eagerness::Eager);
        assert_eq!(action.status, ActionStatus::Queued);
    }
}

#[test]
fn predictions_at_threshold_are_ignored() {
    let mut page = page();
    page.has_search_elements = true;
    let actions = scheduler().schedule(
        &[Prediction::new(BehaviorCategory::Search, 0.6)],
        &page,
        &AccuracyMetric::new(),
        0,
    );
    assert!(actions.is_empty());
}

#[test]
fn search_needs_search_elements() {
    let scheduler = scheduler();
    let predictions = [Prediction::new(BehaviorCategory::Search, 0.7)];
    assert!(scheduler
        .schedule(&predictions, &page(), &AccuracyMetric::new(), 0)
        .is_empty());

    let mut page = page();
    page.has_search_elements = true;
    let actions = scheduler.schedule(&predictions, &page, &AccuracyMetric::new(), 0);
    assert_eq!(
        keys(&actions),
        vec!["/js/search.js", "/api/search/suggestions"]
    );
    assert_eq!(actions[0].eagerness, Eagerness::Moderate);
    assert_eq!(
        actions[1].kind,
        ActionKind::Preload {
            destination: Destination::Data,
            priority: ResourcePriority::Medium
        }
    );
}

#[test]
fn repeated_cycles_do_not_duplicate_live_actions() {
    let scheduler = scheduler();
    let mut page = page();
    page.links = vec![nav_link("/a")];
    let predictions = [Prediction::new(BehaviorCategory::Navigation, 0.9)];

    let first = scheduler.schedule(&predictions, &page, &AccuracyMetric::new(), 0);
    let second = scheduler.schedule(&predictions, &page, &AccuracyMetric::new(), 100);
    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert_eq!(scheduler.registry().len(), 1);
}

#[test]
fn settled_actions_can_be_rescheduled() {
    let scheduler = scheduler();
    let mut page = page();
    page.links = vec![nav_link("/a")];
    let predictions = [Prediction::new(BehaviorCategory::Navigation, 0.9)];

    let first = scheduler.schedule(&predictions, &page, &AccuracyMetric::new(), 0);
    let registry = scheduler.registry();
    registry
        .transition("/a", first[0].generation, ActionStatus::InFlight, 1)
        .unwrap();
    registry
        .transition("/a", first[0].generation, ActionStatus::Failed, 2)
        .unwrap();

    let again = scheduler.schedule(&predictions, &page, &AccuracyMetric::new(), 3);
    assert_eq!(again.len(), 1);
    assert!(again[0].generation > first[0].generation);
}

#[test]
fn shared_keys_keep_the_highest_confidence() {
    let mut config = SchedulerConfig::default();
    config.resources.contact = config.resources.search.clone();
    let scheduler = SpeculativeScheduler::new(config, ActionRegistry::new());
    let mut page = page();
    page.has_search_elements = true;

    let actions = scheduler.schedule(
        &[
            Prediction::new(BehaviorCategory::Search, 0.65),
            Prediction::new(BehaviorCategory::Contact, 0.9),
        ],
        &page,
        &AccuracyMetric::new(),
        0,
    );
    assert_eq!(actions.len(), 2);
    for action in &actions {
        assert_eq!(action.category, BehaviorCategory::Contact);
        assert_eq!(action.eagerness, Eagerness::Eager);
    }
}

#[test]
fn media_near_viewport_is_prefetched() {
    let mut page = page();
    page.media = vec![
        MediaElement {
            src: "/img/hero.jpg".into(),
            kind: MediaKind::Image,
            rect: ElementRect::new(0.0, 850.0, 300.0, 200.0),
        },
        MediaElement {
            src: "/video/far.mp4".into(),
            kind: MediaKind::Video,
            rect: ElementRect::new(0.0, 4000.0, 300.0, 200.0),
        },
    ];
    let actions = scheduler().schedule(
        &[Prediction::new(BehaviorCategory::Media, 0.7)],
        &page,
        &AccuracyMetric::new(),
        0,
    );
    assert_eq!(keys(&actions), vec!["/img/hero.jpg"]);
    assert_eq!(
        actions[0].kind,
        ActionKind::Prefetch {
            destination: Destination::Image
        }
    );
}

#[test]
fn details_take_visible_items_with_urls() {
    let mut page = page();
    page.detail_items = vec![
        DetailItem {
            detail_url: None,
            rect: on_screen(),
        },
        DetailItem {
            detail_url: Some("/item/1".into()),
            rect: on_screen(),
        },
        DetailItem {
            detail_url: Some("/item/2".into()),
            rect: ElementRect::new(0.0, 5000.0, 10.0, 10.0),
        },
        DetailItem {
            detail_url: Some("/item/3".into()),
            rect: on_screen(),
        },
        DetailItem {
            detail_url: Some("/item/4".into()),
            rect: on_screen(),
        },
    ];
    let actions = scheduler().schedule(
        &[Prediction::new(BehaviorCategory::Details, 0.7)],
        &page,
        &AccuracyMetric::new(),
        0,
    );
    assert_eq!(keys(&actions), vec!["/item/1", "/item/3"]);
}

#[test]
fn async_forms_preload_their_scripts() {
    let mut page = page();
    page.forms = vec![
        FormElement {
            is_async: true,
            has_validation: true,
            rect: on_screen(),
        },
        FormElement {
            is_async: false,
            has_validation: true,
            rect: on_screen(),
        },
    ];
    let actions = scheduler().schedule(
        &[Prediction::new(BehaviorCategory::Form, 0.7)],
        &page,
        &AccuracyMetric::new(),
        0,
    );
    assert_eq!(
        keys(&actions),
        vec!["/js/form-validation.js", "/css/forms.css", "/js/async-form.js"]
    );
}

#[test]
fn poor_accuracy_raises_the_bar() {
    let scheduler = scheduler();
    let mut page = page();
    page.has_search_elements = true;
    let mut accuracy = AccuracyMetric::new();
    for _ in 0..20 {
        accuracy.record(0.0);
    }
    assert!(scheduler.threshold(&accuracy) > 0.65);

    let actions = scheduler.schedule(
        &[Prediction::new(BehaviorCategory::Search, 0.65)],
        &page,
        &accuracy,
        0,
    );
    assert!(actions.is_empty());
}

#[test]
fn external_hints_above_threshold_become_prefetches() {
    let scheduler = scheduler();
    let hints = [
        ExternalHint {
            category: BehaviorCategory::Navigation,
            url: "/next".into(),
            destination: Destination::Document,
            confidence: 0.9,
        },
        ExternalHint {
            category: BehaviorCategory::Media,
            url: "/weak.jpg".into(),
            destination: Destination::Image,
            confidence: 0.7,
        },
    ];
    let actions = scheduler.schedule_external(&hints, 0);
    assert_eq!(keys(&actions), vec!["/next"]);
    assert_eq!(
        actions[0].kind,
        ActionKind::Prefetch {
            destination: Destination::Document
        }
    );
}

#[test]
fn visible_element_warms_component_and_data() {
    let scheduler = scheduler();
    let element = VisibleElement {
        tag: "section".into(),
        component: Some("reviews".into()),
        api: Some("/api/reviews".into()),
        links: vec![nav_link("/reviews/all"), {
            let mut plain = nav_link("/footer");
            plain.in_nav = false;
            plain
        }],
        intersection_ratio: 0.75,
    };
    let actions = scheduler.schedule_visible_element(&element, 0);
    assert_eq!(
        keys(&actions),
        vec!["component:reviews", "/api/reviews", "/reviews/all"]
    );
    assert_eq!(actions[0].kind, ActionKind::WarmCache);
    assert_eq!(actions[0].category, BehaviorCategory::Details);
    assert_eq!(actions[2].category, BehaviorCategory::Navigation);
    assert_eq!(actions[0].eagerness, Eagerness::Moderate);
}

#[test]
fn barely_visible_elements_are_ignored() {
    let element = VisibleElement {
        component: Some("reviews".into()),
        intersection_ratio: 0.5,
        ..VisibleElement::default()
    };
    assert!(scheduler().schedule_visible_element(&element, 0).is_empty());
}

#[test]
fn hints_arrive_as_json() {
    let hints: Vec<ExternalHint> = serde_json::from_str(
        r#"[{"category":"media","url":"/img/next.jpg","destination":"image","confidence":0.8}]"#,
    )
    .unwrap();
    let actions = scheduler().schedule_external(&hints, 0);
    assert_eq!(actions[0].category, BehaviorCategory::Media);
    assert_eq!(
        actions[0].kind,
        ActionKind::Prefetch {
            destination: Destination::Image
        }
    );
    assert_eq!(actions[0].eagerness, Eagerness::Moderate);
}
