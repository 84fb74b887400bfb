use archdeck_core::catalogs::{gcp_infra, gke_app};
use archdeck_core::{AppView, CatalogStore, ExplorerSession, InfraView, Prompt, ViewSet};
use serde_json::json;

fn app_session() -> ExplorerSession<AppView> {
    gke_app::open_session().expect("gke_app session opens")
}

fn infra_session() -> ExplorerSession<InfraView> {
    gcp_infra::open_session().expect("gcp_infra session opens")
}

#[test]
fn new_session_starts_from_defaults() {
    let session = app_session();

    assert_eq!(session.state().selection.selected(), None);
    assert_eq!(session.state().view.active(), AppView::Architecture);
    assert_eq!(session.state().accordion.expanded(), None);
    assert!(session.current_item().is_none());
    assert!(session.expanded_entry().is_none());
    assert!(session.prompt().is_none());
}

#[test]
fn selecting_sidecar_twice_selects_then_clears() {
    let mut session = app_session();

    session.select_item("sidecar");
    let item = session.current_item().expect("sidecar is selected");
    assert_eq!(item.id, "sidecar");
    assert!(item.description.starts_with("Istio envoy proxy (auto-injected)"));

    session.select_item("sidecar");
    assert!(session.current_item().is_none());
    assert_eq!(session.state().selection.selected(), None);
}

#[test]
fn double_select_returns_to_none_for_every_item() {
    let mut session = app_session();
    let ids: Vec<String> = session
        .store()
        .groups()
        .iter()
        .flat_map(|group| group.items.iter().map(|item| item.id.clone()))
        .collect();

    for id in ids {
        session.select_item(id.as_str());
        assert_eq!(session.current_item().map(|item| item.id.as_str()), Some(id.as_str()));
        session.select_item(id.as_str());
        assert_eq!(session.state().selection.selected(), None, "after `{id}`");
    }
}

#[test]
fn selecting_another_item_replaces_selection() {
    let mut session = app_session();
    session.select_item("sidecar");
    session.select_item("pdb");

    assert_eq!(session.current_item().map(|item| item.id.as_str()), Some("pdb"));
}

#[test]
fn unknown_identifier_resolves_to_no_item() {
    let mut session = app_session();
    session.select_item("not-in-catalog");

    assert_eq!(session.state().selection.selected(), Some("not-in-catalog"));
    assert!(session.current_item().is_none());
    assert!(session.snapshot().selected.is_none());
}

#[test]
fn switching_views_keeps_selection_and_expansion() {
    let mut session = app_session();
    session.select_item("istio-mtls");
    session.toggle_period(2);

    for view in AppView::ALL {
        session.set_view(*view);
        assert_eq!(session.state().view.active(), *view);
        assert_eq!(session.state().selection.selected(), Some("istio-mtls"));
        assert_eq!(session.state().accordion.expanded(), Some(2));
    }

    session.set_view(AppView::Comparison);
    session.set_view(AppView::Comparison);
    assert_eq!(session.state().view.active(), AppView::Comparison);
}

#[test]
fn double_toggle_returns_expansion_to_prior_value() {
    let mut session = app_session();
    let periods: Vec<u32> = session.store().plan().iter().map(|entry| entry.period).collect();

    for period in periods {
        session.toggle_period(period);
        assert_eq!(
            session.expanded_entry().map(|entry| entry.period),
            Some(period)
        );
        session.toggle_period(period);
        assert_eq!(session.state().accordion.expanded(), None);
    }

    session.toggle_period(1);
    session.toggle_period(3);
    assert_eq!(session.state().accordion.expanded(), Some(3));
    session.toggle_period(3);
    assert_eq!(session.state().accordion.expanded(), None);
}

#[test]
fn snapshot_lists_items_of_expanded_period() {
    let mut session = app_session();
    session.set_view(AppView::Roadmap);
    session.toggle_period(2);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.active_view, "roadmap");
    assert_eq!(snapshot.views.iter().filter(|tab| tab.active).count(), 1);
    let expanded = snapshot.expanded.expect("week 2 is open");
    assert_eq!(expanded.period, 2);

    let ids: Vec<&str> = snapshot
        .expanded_items
        .iter()
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(ids.first(), Some(&"istio-arch"));
    assert!(ids.contains(&"falco"));
    assert!(!ids.contains(&"sidecar"));
}

#[test]
fn infra_prompt_resolves_vpc_question_and_default() {
    let mut session = infra_session();
    let table = session.store().prompts().cloned().expect("prompt table");
    let vpc_question = table.entries.get("vpc").cloned().expect("vpc entry");

    assert_eq!(session.prompt(), Some(Prompt::Default(table.default.as_str())));

    session.select_item("vpc");
    assert_eq!(session.prompt(), Some(Prompt::Specific(vpc_question.as_str())));
    assert!(vpc_question.contains("without Cloud NAT"));

    session.select_item("nonexistent-id");
    assert_eq!(
        session.prompt().map(|prompt| prompt.text().to_string()),
        Some(table.default.clone())
    );

    session.select_item("iam");
    assert!(session.prompt().is_some_and(|prompt| prompt.is_default()));
}

#[test]
fn snapshot_serializes_for_presentation() {
    let mut session = infra_session();
    session.select_item("vpc");
    session.set_view(InfraView::Flow);

    let value = serde_json::to_value(session.snapshot()).expect("snapshot serializes");
    assert_eq!(value["active_view"], "flow");
    assert_eq!(value["selected"]["id"], "vpc");
    assert!(value["expanded"].is_null());
    assert_eq!(value["views"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["session_id"], session.session_id().to_string());
    assert!(value["prompt"].as_str().is_some());
}

#[test]
fn sessions_do_not_share_state() {
    let mut first = app_session();
    let second = app_session();

    first.select_item("sidecar");
    assert_ne!(first.session_id(), second.session_id());
    assert!(second.current_item().is_none());
}

#[test]
fn stale_prompt_key_resolves_to_default() {
    let raw = json!({
        "title": "stale prompts",
        "groups": [{
            "id": "net",
            "label": "Net",
            "items": [{"id": "vpc", "name": "VPC", "description": "d", "rationale": "r"}]
        }],
        "prompts": {"default": "fallback", "entries": {"vpc": "q", "ghost": "q2"}}
    })
    .to_string();
    let store = CatalogStore::from_json(&raw).expect("stale prompt keys do not fail load");
    let mut session = ExplorerSession::<InfraView>::new(store);

    session.select_item("ghost");
    assert!(session.current_item().is_none());
    assert_eq!(session.prompt(), Some(Prompt::Default("fallback")));

    session.select_item("vpc");
    assert_eq!(session.prompt(), Some(Prompt::Specific("q")));
}
