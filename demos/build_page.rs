use pageforge::{InMemoryCanvas, SceneGraphBuilder, TokenResolver};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let tokens = TokenResolver::builtin()?;
    let mut canvas = InMemoryCanvas::new();
    let scene = SceneGraphBuilder::new(&mut canvas, &tokens, "dark")
        .build()
        .await?;

    println!(
        "built {} nodes, {} anchors, fingerprint {}",
        canvas.node_count(),
        scene.anchors.len(),
        scene.anchors.fingerprint()
    );
    for section in canvas.children_of(scene.root) {
        let name = canvas.name_of(*section).unwrap_or("?");
        println!("  section {name}: {} children", canvas.children_of(*section).len());
    }

    Ok(())
}
