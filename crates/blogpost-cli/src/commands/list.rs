use anyhow::Result;

use blogpost_core::assembler::DocumentAssembler;

use crate::output;

/// Print every post type and every topic with its display title.
pub fn run() -> Result<()> {
    let assembler = DocumentAssembler::new()?;

    output::print_header("Post types");
    for post_type in assembler.post_types() {
        println!("  {post_type}");
    }

    output::print_header("Topics");
    for (topic, record) in assembler.topics() {
        output::print_key_value(topic.as_str(), record.title().unwrap_or("-"));
    }

    Ok(())
}
