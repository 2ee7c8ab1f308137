use chrono::NaiveDate;
use smartwaste_core::{Entity, FixedClock};
use smartwaste_inventory::{Outcome, Page, Session, SessionConfig};

fn seeded() -> Session<FixedClock> {
    let today = NaiveDate::from_ymd_opt(2026, 1, 19).unwrap();
    Session::start(FixedClock::on(today), SessionConfig::default()).unwrap()
}

#[test]
fn dashboard_is_the_default_page() {
    let view = smartwaste_app::render(&seeded()).unwrap();
    assert_eq!(view["page"], "dashboard");
    assert_eq!(view["view"]["total_items"], 3);
    assert_eq!(view["view"]["counts"]["warning"], 1);
    assert_eq!(view["view"]["top_urgent"][0]["item"]["name"], "Tomatoes");
    assert_eq!(
        view["view"]["top_urgent"][0]["suggested_action"],
        "Use first / apply discount"
    );
}

#[test]
fn inventory_page_lists_ranked_items() {
    let mut s = seeded();
    s.navigate(Page::Inventory);
    let view = smartwaste_app::render(&s).unwrap();
    let names: Vec<&str> = view["view"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["item"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Tomatoes", "Chicken breast", "Milk"]);
    assert_eq!(view["view"][0]["status"]["tone"], "warning");
}

#[test]
fn logs_page_shows_entries_and_summary() {
    let mut s = seeded();
    let milk = s.list_inventory()[0].id();
    s.request_removal(milk).unwrap();
    s.commit_outcome(Some(Outcome::Donated), Some("shelter")).unwrap();
    s.navigate(Page::Logs);

    let view = smartwaste_app::render(&s).unwrap();
    assert_eq!(view["page"], "logs");
    assert_eq!(view["view"]["summary"]["saved"], 1);
    assert_eq!(view["view"]["entries"][0]["name"], "Milk");
    assert_eq!(view["view"]["entries"][0]["outcome"], "donated");
    assert_eq!(view["view"]["entries"][0]["notes"], "shelter");
}
