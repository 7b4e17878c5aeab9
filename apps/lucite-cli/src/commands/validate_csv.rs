use crate::error::CliResult;
use lucite_csvs::read_investor_csv;
use std::path::PathBuf;

pub fn execute(csv_path: PathBuf) -> CliResult<()> {
    println!("📄 Validating {}...", csv_path.display());

    let investors = read_investor_csv(&csv_path)?;

    println!("✅ {} investor record(s) are valid:", investors.len());
    for record in &investors {
        println!(
            "   Token {} → {} (image {}, animation {})",
            record.token_id, record.address, record.image_cid, record.animation_cid
        );
    }

    Ok(())
}
