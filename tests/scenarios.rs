use hookwire::{
    Author, Embed, EmbedBuilder, Field, Fields, Identity, Webhook, WireFormat,
};
use serde_json::Value;

const URL: &str = "https://discord.com/api/webhooks/123456/abcdef";

fn parse(webhook: &Webhook) -> Value {
    serde_json::from_str(&webhook.build().unwrap()).unwrap()
}

#[test]
fn minimum_content() {
    let webhook = Webhook::new(URL).with_content("hi");
    assert_eq!(parse(&webhook), serde_json::json!({ "content": "hi" }));
}

#[test]
fn identity_override() {
    let webhook = Identity::new(URL)
        .with_username("bot")
        .with_avatar_url("https://x/a.png")
        .webhook()
        .with_content("hi");

    let body = webhook.build().unwrap();
    let username = body.find("\"username\"").unwrap();
    let avatar = body.find("\"avatar_url\"").unwrap();
    let content = body.find("\"content\"").unwrap();
    assert!(username < avatar && avatar < content);
}

#[test]
fn embed_with_title_description_color() {
    let webhook = Webhook::new(URL).with_embed(
        EmbedBuilder::new()
            .title("T")
            .description("D")
            .color("FF0000")
            .build(),
    );

    assert_eq!(
        webhook.build().unwrap(),
        r#"{"embeds":[{"description":"D","title":"T","color":"16711680"}]}"#
    );
}

#[test]
fn field_list() {
    let mut embed = Embed::new();
    embed.fields = Fields::from(vec![
        Field::new("n1", "v1", true),
        Field::new("n2", "v2", false),
        Field::new("", "", false),
    ]);

    let body = parse(&Webhook::new(URL).with_embed(embed));
    assert_eq!(
        body["embeds"][0]["fields"],
        serde_json::json!([
            { "name": "n1", "value": "v1", "inline": "true" },
            { "name": "n2", "value": "v2" }
        ])
    );
}

#[test]
fn author_without_name() {
    let mut embed = Embed::new();
    embed.author = Author::default()
        .with_url("https://x")
        .with_icon_url("https://x/i.png");

    let body = parse(&Webhook::new(URL).with_embed(embed));
    assert_eq!(body["embeds"][0]["author"], serde_json::json!({}));
}

#[test]
fn timestamp_round_trip() {
    let webhook = Webhook::new(URL).with_embed(
        EmbedBuilder::new()
            .timestamp("2024-01-02 03:04:05.6789")
            .build(),
    );

    let body = parse(&webhook);
    assert_eq!(body["embeds"][0]["timestamp"], "2024-01-02 03:04:05.6789");
}

#[test]
fn malformed_color_falls_back_to_zero() {
    let webhook = Webhook::new(URL).with_embed(EmbedBuilder::new().color("nothex").build());
    assert_eq!(parse(&webhook)["embeds"][0]["color"], "0");
}

#[test]
fn typed_wire_format() {
    let webhook = Webhook::new(URL)
        .with_wire_format(WireFormat::Typed)
        .with_tts(true)
        .with_embed(
            EmbedBuilder::new()
                .title("T")
                .link("Docs", "https://x/docs")
                .color("FF0000")
                .inline_field("n", "v")
                .build(),
        );

    let body = parse(&webhook);
    assert_eq!(body["tts"], true);
    assert_eq!(body["embeds"][0]["color"], 16711680);
    assert_eq!(body["embeds"][0]["title"], "T");
    assert_eq!(body["embeds"][0]["fields"][0]["inline"], true);
}

#[test]
fn empty_message() {
    assert_eq!(Webhook::new(URL).build().unwrap(), "{}");
}
