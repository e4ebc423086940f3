//! The `certdrill init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_unless_exists(Path::new("certdrill.toml"), SAMPLE_CONFIG)?;

    std::fs::create_dir_all("data/sample")?;
    write_unless_exists(Path::new("data/sample/questions.yaml"), SAMPLE_QUESTIONS)?;

    println!("\nNext steps:");
    println!("  1. Add topic directories with question files under data/");
    println!("  2. Run: certdrill validate");
    println!("  3. Run: certdrill");

    Ok(())
}

fn write_unless_exists(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# certdrill configuration

data_dir = "data"
title = "CERTIFICATE PRACTICE"
question_width = 75
answer_width = 35
draw_factor = 50
"#;

const SAMPLE_QUESTIONS: &str = r#"questions:
  - uuid: sample-0001
    question: Which command checks the question files of every topic?
    answers:
      - value: certdrill validate
        correct: true
      - value: certdrill check
        correct: false
  - uuid: sample-0002
    question: Which characters separate several answer numbers?
    answers:
      - value: commas
        correct: true
      - value: semicolons
        correct: false
      - value: slashes
        correct: false
"#;
