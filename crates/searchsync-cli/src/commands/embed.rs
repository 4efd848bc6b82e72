use anyhow::{Context, Result};

pub async fn run_embed(text: &str, full: bool) -> Result<()> {
    let vector = searchsync_embed::embed_text(text)
        .await
        .context("Embedding request failed")?;

    if full {
        println!("{}", serde_json::to_string(&vector)?);
        return Ok(());
    }

    let head: Vec<String> = vector.iter().take(5).map(|v| format!("{:.6}", v)).collect();
    println!("dimension: {}", vector.len());
    println!("head: [{}{}]", head.join(", "), if vector.len() > 5 { ", ..." } else { "" });

    Ok(())
}
