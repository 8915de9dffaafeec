use serde::Serialize;

use crate::distribution::TheoreticalDistribution;

/// A horizontal reference line drawn at a theoretical BAF or DR value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceLine {
    pub y: f64,
    pub label: String,
}

// groups labels by exact y value, keeping first-occurrence order
fn group_lines<I>(items: I) -> Vec<ReferenceLine>
where
    I: IntoIterator<Item = (f64, String)>,
{
    let mut lines: Vec<(f64, Vec<String>)> = Vec::new();

    for (y, label) in items {
        match lines.iter_mut().find(|(value, _)| value.to_bits() == y.to_bits()) {
            Some((_, labels)) => {
                if !labels.contains(&label) {
                    labels.push(label);
                }
            }
            None => lines.push((y, vec![label])),
        }
    }

    lines
        .into_iter()
        .map(|(y, labels)| ReferenceLine {
            y,
            label: labels.join(" "),
        })
        .collect()
}

///
/// One line per distinct theoretical BAF, labeled with every `minor/total`
/// genotype predicting that BAF.
///
pub fn baf_reference_lines(distribution: &TheoreticalDistribution) -> Vec<ReferenceLine> {
    group_lines(distribution.iter().map(|p| (p.baf, p.label())))
}

///
/// One line per distinct theoretical DR, labeled with the total copy
/// number(s) predicting that DR.
///
pub fn dr_reference_lines(distribution: &TheoreticalDistribution) -> Vec<ReferenceLine> {
    group_lines(distribution.iter().map(|p| (p.dr, p.total.to_string())))
}

///
/// Length of the x axis for `n` plotted records: at least 10, and rounded up
/// to a multiple of 10 so the axis splits evenly.
///
pub fn axis_length(n: usize) -> usize {
    if n < 10 {
        return 10;
    }
    n.div_ceil(10) * 10
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_baf_lines_merge_equal_values() {
        // at purity 1: 1/2 and 2/4 both sit at BAF 0.5
        let distribution = TheoreticalDistribution::build(1.0, 2.0, &[2, 4]).unwrap();
        let lines = baf_reference_lines(&distribution);

        let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["0/2 0/4", "1/2 2/4", "1/4"]);
        assert_eq!(lines[1].y, 0.5);
    }

    #[rstest]
    fn test_dr_lines_one_per_total() {
        let distribution = TheoreticalDistribution::build(0.6, 2.0, &[1, 2, 3]).unwrap();
        let lines = dr_reference_lines(&distribution);

        let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "3"]);
        assert!(lines.windows(2).all(|w| w[0].y < w[1].y));
    }

    #[rstest]
    #[case(0, 10)]
    #[case(9, 10)]
    #[case(10, 10)]
    #[case(11, 20)]
    #[case(250, 250)]
    #[case(251, 260)]
    fn test_axis_length(#[case] n: usize, #[case] expected: usize) {
        assert_eq!(axis_length(n), expected);
    }
}
