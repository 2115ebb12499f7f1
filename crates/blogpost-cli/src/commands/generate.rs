use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncWriteExt;

use blogpost_core::assembler::DocumentAssembler;

use crate::output;

/// Assemble one blog post and write it out.
///
/// Writes to `output_path` when given (printing a confirmation line), otherwise streams
/// the post to stdout with nothing else mixed in. Nothing is written if assembly fails.
pub async fn run(post_type: &str, topic: &str, output_path: Option<&Path>) -> Result<()> {
    let assembler = DocumentAssembler::new()?;
    let document = assembler.assemble(post_type, topic)?;

    tracing::info!(
        post_type = %document.post_type(),
        topic = %document.topic(),
        bytes = document.as_str().len(),
        "assembled blog post"
    );

    match output_path {
        Some(path) => {
            tokio::fs::write(path, document.as_str())
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            output::print_success(&format!(
                "Blog post generated and saved to {}",
                path.display()
            ));
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(document.as_str().as_bytes())
                .await
                .context("failed to write to stdout")?;
            stdout.flush().await.context("failed to write to stdout")?;
        }
    }

    Ok(())
}
