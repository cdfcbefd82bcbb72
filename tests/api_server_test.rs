use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tokio::net::TcpListener;

use vivah::api_server::serve;
use vivah::Config;

async fn spawn_server() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let mut config = Config::default();
    config.site.base_url = "https://invite.example".to_string();

    tokio::spawn(async move {
        let _ = serve(listener, config).await;
    });
    Ok(format!("http://{}", addr))
}

async fn get_json(url: &str) -> Result<(u16, Value)> {
    let response = reqwest::get(url).await?;
    let status = response.status().as_u16();
    Ok((status, response.json().await?))
}

#[tokio::test]
async fn test_health() -> Result<()> {
    let base = spawn_server().await?;
    let (status, body) = get_json(&format!("{}/health", base)).await?;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn test_invitation_card() -> Result<()> {
    let base = spawn_server().await?;
    let (status, card) = get_json(&format!("{}/invitation", base)).await?;
    assert_eq!(status, 200);
    assert_eq!(card["groom_name"], "Neelesh");
    assert_eq!(card["bride_parents"]["title"], "D/o");
    assert_eq!(card["rsvp_contacts"][1]["title"], "Special Request");
    assert_eq!(card["rsvp_link"], "https://wa.me/919828023034");
    Ok(())
}

#[tokio::test]
async fn test_days_respect_events_filter() -> Result<()> {
    let base = spawn_server().await?;

    let (_, all) = get_json(&format!("{}/days", base)).await?;
    assert_eq!(all.as_array().map(Vec::len), Some(6));

    let (_, some) = get_json(&format!("{}/days?events=sangeet,haldi", base)).await?;
    let ids: Vec<_> = some
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["haldi", "sangeet"]);
    assert_eq!(some[1]["theme"]["theme"], "sangeet");
    assert_eq!(some[1]["theme"]["primary"], "#3b82f6");
    Ok(())
}

#[tokio::test]
async fn test_day_detail_and_missing_day() -> Result<()> {
    let base = spawn_server().await?;

    let (status, day) = get_json(&format!("{}/days/2", base)).await?;
    assert_eq!(status, 200);
    assert_eq!(day["image"], "sakdi");
    assert_eq!(day["theme"]["theme"], "ganesh");
    assert_eq!(day["events"][0]["name"], "Sakdi Vinayak");
    assert!(day["events"][0]["google_calendar_url"]
        .as_str()
        .unwrap()
        .contains("dates=20260204/20260204"));

    let (status, missing) = get_json(&format!("{}/days/42", base)).await?;
    assert_eq!(status, 404);
    assert_eq!(missing["success"], false);
    Ok(())
}

#[tokio::test]
async fn test_calendar_endpoint() -> Result<()> {
    let base = spawn_server().await?;

    let (status, google) = get_json(&format!("{}/days/5/events/0/calendar", base)).await?;
    assert_eq!(status, 200);
    assert_eq!(google["provider"], "google");
    assert_eq!(google["date_stamp"], "20260206");
    assert_eq!(google["title"], "Bhaat - Lagan-Laagi-Re");

    let (_, ics) = get_json(&format!("{}/days/5/events/0/calendar?provider=ics", base)).await?;
    assert!(ics["link"]
        .as_str()
        .unwrap()
        .starts_with("data:text/calendar;charset=utf-8,BEGIN%3AVCALENDAR%0A"));

    let (status, _) = get_json(&format!("{}/days/5/events/9/calendar", base)).await?;
    assert_eq!(status, 404);
    Ok(())
}

#[tokio::test]
async fn test_share_link_uses_site_base() -> Result<()> {
    let base = spawn_server().await?;

    let (_, share) = get_json(&format!("{}/share?events=baan,bogus,haldi", base)).await?;
    assert_eq!(share["link"], "https://invite.example?events=baan,haldi");
    assert_eq!(share["events"], serde_json::json!(["baan", "haldi"]));

    let (_, bare) = get_json(&format!("{}/share", base)).await?;
    assert_eq!(bare["link"], "https://invite.example");
    Ok(())
}
