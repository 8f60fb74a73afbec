use pageforge::{
    GenerationSession, InMemoryCanvas, ScriptedProvider, StatusSink, StatusUpdate, TokenResolver,
};

struct PrintStatus;

impl StatusSink for PrintStatus {
    fn status(&mut self, update: &StatusUpdate) {
        println!("[{}] {}", update.state, update.message);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let reply = r#"{
        "hero": {
            "title": "Your launch, live today",
            "subtitle": "Describe the page, get a finished draft.",
            "highlights": ["Token-driven styling", "Deterministic layout"]
        },
        "metrics": [
            { "value": "45s", "label": "Prompt to page" },
            { "value": "3", "label": "Sections composed" }
        ],
        "cta": { "title": "Point it at your canvas" }
    }"#;

    let tokens = TokenResolver::builtin()?;
    let mut canvas = InMemoryCanvas::new();
    let provider = ScriptedProvider::single(reply);

    let report = GenerationSession::new(&mut canvas, &provider, &tokens, "dark")
        .run("a landing page for a page generator", &mut PrintStatus)
        .await;

    if let Some(stats) = report.stats {
        println!(
            "{} texts set, {} rows shown, {} hidden, {} anchors missed",
            stats.texts_set, stats.rows_shown, stats.rows_hidden, stats.anchors_missed
        );
    }
    println!("{} nodes on canvas", canvas.node_count());

    Ok(())
}
