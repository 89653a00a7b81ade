mod pages;

use anyhow::Context;
use vortex_dom::logging::{init_logging, LoggingConfig};
use vortex_ui::prelude::*;
use vortex_ui::Phase;

use pages::{App, HomePage};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let mut rt = launch();
    anyhow::ensure!(rt.phase() == Phase::Mounted, "first render failed, see the log");

    // ── Simulated session ─────────────────────────────────────────────────
    click(&mut rt, "#fab")?;
    click(&mut rt, "#fab")?;
    type_into(&mut rt, "#name", "Ada")?;
    click(&mut rt, "#theme")?;

    let doc = rt.document();
    println!("{}", doc.outer_html(doc.document_node()));
    Ok(())
}

fn launch() -> Runtime {
    Application::new()
        .action("toggleTheme", |cx, _| {
            let dark = cx.state().get_bool("dark").unwrap_or(false);
            cx.set_state([("dark", !dark)]);
        })
        .launch(host_document(), |rt| {
            let home = rt.create_widget(HomePage { title: "Flutter Demo Home Page".into() });
            rt.create_widget(App { home })
        })
}

fn find(rt: &Runtime, selector: &str) -> anyhow::Result<NodeId> {
    rt.document()
        .query_selector(selector)
        .with_context(|| format!("no element matches `{selector}`"))
}

fn click(rt: &mut Runtime, selector: &str) -> anyhow::Result<()> {
    let target = find(rt, selector)?;
    let ran = rt.dispatch(&Event::click(target));
    log::info!("click {selector} ({ran} listeners)");
    Ok(())
}

fn type_into(rt: &mut Runtime, selector: &str, value: &str) -> anyhow::Result<()> {
    let target = find(rt, selector)?;
    rt.document_mut().set_value(target, value);
    let ran = rt.dispatch(&Event::input(target));
    log::info!("input {selector} = {value:?} ({ran} listeners)");
    Ok(())
}
