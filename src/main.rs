use anyhow::Result;
use fofou_import::ForumImport;

fn main() -> Result<()> {
    let summary = ForumImport::new().run()?;

    println!("{}", summary.report);
    println!(
        "Wrote {} topics, {} posts ({} bytes) to {}",
        summary.topics,
        summary.posts,
        summary.bytes_written,
        summary.output_path.display()
    );

    Ok(())
}
