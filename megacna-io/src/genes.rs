use std::io::BufRead;
use std::path::Path;

use log::info;

use megacna_core::models::GeneInterval;
use megacna_core::utils::get_dynamic_reader;

use crate::error::{Result, invalid_record};

// a header names its coordinate columns, it never carries digits there
fn is_header(parts: &[&str]) -> bool {
    parts.len() >= 3
        && parts[1..3]
            .iter()
            .all(|p| !p.is_empty() && !p.contains(|c: char| c.is_ascii_digit()))
}

///
/// Read a gene table: tab separated `chromosome start end name`, optionally
/// gzipped.
///
/// Lines starting with `#` and a leading column header are skipped. Rows are
/// returned in file order; the table is expected to be grouped by chromosome
/// and sorted by start, and is not re-sorted here.
///
/// # Arguments
/// - path: path to the gene table
///
pub fn read_gene_intervals(path: &Path) -> Result<Vec<GeneInterval>> {
    let reader = get_dynamic_reader(path)?;

    let mut genes: Vec<GeneInterval> = Vec::new();
    let mut first_line = true;

    for (row, line) in reader.lines().enumerate() {
        let line = line?;

        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split('\t').map(str::trim).collect();

        // Handling column headers like `chr start end name` without #
        if first_line {
            first_line = false;
            if is_header(&parts) {
                continue;
            }
        }

        if parts.len() < 4 {
            return Err(invalid_record(
                row,
                format!("expected 4 columns, found {}", parts.len()),
            ));
        }

        let start: u64 = parts[1]
            .parse()
            .map_err(|_| invalid_record(row, format!("invalid start {:?}", parts[1])))?;
        let end: u64 = parts[2]
            .parse()
            .map_err(|_| invalid_record(row, format!("invalid end {:?}", parts[2])))?;

        genes.push(GeneInterval::new(parts[0], start, end, parts[3]));
    }

    info!("Loaded {} gene intervals from {}", genes.len(), path.display());

    Ok(genes)
}

#[cfg(test)]
mod tests {
    use super::*;

    use megacna_core::CnaError;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::error::ParseError;

    fn write_tsv(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("genes.tsv");
        std::fs::write(&path, contents).unwrap();
        (tempdir, path)
    }

    #[rstest]
    fn test_read_genes_with_header() {
        let (_dir, path) = write_tsv(
            "# hg38 subset\nchromosome\tstart\tend\tgene\nchr1\t10\t20\tA\nchr1\t30\t40\tB\n\nchr2\t5\t9\tC\n",
        );
        let genes = read_gene_intervals(&path).unwrap();

        assert_eq!(
            genes,
            vec![
                GeneInterval::new("chr1", 10, 20, "A"),
                GeneInterval::new("chr1", 30, 40, "B"),
                GeneInterval::new("chr2", 5, 9, "C"),
            ]
        );
    }

    #[rstest]
    #[case(&["chromosome", "start", "end", "gene"], true)]
    #[case(&["chr", "txStart", "txEnd", "name"], true)]
    #[case(&["chr1", "x", "20", "B"], false)]
    #[case(&["chr1", "10", "20", "A"], false)]
    #[case(&["chr1", "start"], false)]
    fn test_is_header(#[case] parts: &[&str], #[case] expected: bool) {
        assert_eq!(is_header(parts), expected);
    }

    #[rstest]
    fn test_order_is_preserved() {
        let (_dir, path) = write_tsv("chr1\t30\t40\tB\nchr1\t10\t20\tA\n");
        let genes = read_gene_intervals(&path).unwrap();
        assert_eq!(genes[0].name, "B");
    }

    #[rstest]
    #[case("chr1\t10\t20\n")]
    #[case("chr1\tx\t20\tB\nchr1\t30\t40\tC\n")]
    #[case("chr1\t10\ty\tB\n")]
    #[case("chr1\t10\t20\tA\nchr1\tx\t20\tB\n")]
    #[case("chr1\t10\t20\tA\nchr1\t30\t-1\tB\n")]
    fn test_invalid_rows(#[case] contents: &str) {
        let (_dir, path) = write_tsv(contents);
        assert!(matches!(
            read_gene_intervals(&path),
            Err(ParseError::Core(CnaError::InvalidRecord { .. }))
        ));
    }
}
