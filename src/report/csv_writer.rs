use anyhow::{Context, Result};
use csv::Writer;
use log::{debug, info};
use std::io;
use std::path::Path;

use crate::common::constants::CSV_HEADER;
use crate::common::types::LinkRecord;

/// Header, then tagged links, then untagged links, each in document order.
/// The parameter column shows the parameters found, not the merged ones.
pub fn write_rows<W: io::Write>(
    writer: W,
    with_utm: &[LinkRecord],
    without_utm: &[LinkRecord],
) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(CSV_HEADER)?;

    for record in with_utm.iter().chain(without_utm) {
        writer.write_record([
            record.original_href.as_str(),
            record.utm_flag(),
            record.query_parameters.flatten().as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

pub fn export_csv(path: &Path, with_utm: &[LinkRecord], without_utm: &[LinkRecord]) -> Result<()> {
    debug!(
        "Writing {} report row(s) to {}",
        with_utm.len() + without_utm.len(),
        path.display()
    );
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create CSV report: {}", path.display()))?;
    write_rows(file, with_utm, without_utm)
        .with_context(|| format!("Failed to write CSV report: {}", path.display()))?;
    info!("CSV report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Classifier;
    use crate::settings::UtmSettings;

    fn rows(with_utm: &[&str], without_utm: &[&str]) -> String {
        let settings = UtmSettings::new("S", "M", "C");
        let classifier = Classifier::new(&settings);
        let classify = |hrefs: &[&str]| -> Vec<LinkRecord> {
            hrefs
                .iter()
                .map(|href| classifier.classify(href).unwrap())
                .collect()
        };

        let mut out = Vec::new();
        write_rows(&mut out, &classify(with_utm), &classify(without_utm)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_rows_order_and_format() {
        let csv = rows(
            &["http://x.test/a?utm_source=other"],
            &["http://x.test/a?b=1"],
        );
        assert_eq!(
            csv,
            "Input URL,UTM Codes,Query Parameters\n\
             http://x.test/a?utm_source=other,Yes,utm_source=other\n\
             http://x.test/a?b=1,No,b=1\n"
        );
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let csv = rows(&[], &["https://x.test/?tag=a&tag=b"]);
        assert!(csv.ends_with("https://x.test/?tag=a&tag=b,No,\"tag=a,b\"\n"));
    }

    #[test]
    fn test_header_only_when_no_links() {
        assert_eq!(rows(&[], &[]), "Input URL,UTM Codes,Query Parameters\n");
    }
}
