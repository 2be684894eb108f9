use anyhow::Result;
use popkit::prelude::*;
use popkit::serde_json::json;

fn main() -> Result<()> {
    env_logger::init();

    let config = PopupConfig::from_env_or_default();
    log::info!("Using popup config: {:?}", config);

    let document = Document::new();
    let container = document.create_element("main");
    document.body().append_child(&container)?;

    let mut saved = PopupBuilder::with_config(&document, config.clone());
    saved
        .configure(&json!({
            "msg": "<strong>Saved</strong> your changes",
            "css": {"max-width": "20rem"}
        }))?
        .attach(None)?
        .show();

    let offline = PopupSettings::from_toml(
        r#"
msg = "Working offline"
side = "bottom right"

[css]
backgroundColor = "khaki"
"#,
    )?;
    let mut notice = PopupBuilder::with_config(&document, config.clone());
    notice.configure_with(&offline)?.attach(None)?.show();

    let mut warning = PopupBuilder::with_config(&document, config);
    warning
        .set_content("Connection lost")
        .set_theme("dark")
        .set_position("bottom left")?
        .set_animation("bottom")?
        .attach(Some(&container))?
        .show();

    println!("{}", document.to_html());

    warning.hide();
    println!("{}", warning.to_html());

    Ok(())
}
