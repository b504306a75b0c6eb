use std::io::Write;

use anyhow::Context;
use strum::{EnumIter, IntoEnumIterator};

use super::{Report, SequenceSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Field {
    Name,
    Length,
    AlignStart,
    AlignEnd,
    Gaps,
    Score,
    Recurrence,
}

impl Field {
    pub fn extract_from(&self, summary: &SequenceSummary) -> String {
        match self {
            Field::Name => summary.name.clone(),
            Field::Length => summary.length.to_string(),
            Field::AlignStart => summary.start.to_string(),
            Field::AlignEnd => summary.end.to_string(),
            Field::Gaps => summary.gaps.to_string(),
            Field::Score => summary.score.to_string(),
            Field::Recurrence => summary.recurrence.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TableFormat {
    pub fields: Vec<Field>,
    pub labels: Vec<Vec<String>>,
    pub min_widths: Vec<usize>,
    pub widths: Vec<usize>,
}

impl TableFormat {
    pub fn new(fields: &[Field]) -> anyhow::Result<Self> {
        let mut labels = vec![];
        let mut min_widths = vec![];
        let mut widths = vec![];

        // this regex matches CamelCaseWords
        let label_regex =
            regex::Regex::new(r"[A-Z][a-z]*").context("failed to build field label regex")?;

        let label_fn = |field: &Field| -> anyhow::Result<(Vec<String>, usize)> {
            // the Debug string for an enum produces the variant name
            let field_name = format!("{:?}", field);

            let (label_words, lengths): (Vec<_>, Vec<_>) = label_regex
                .find_iter(&field_name)
                .map(|m| (m.as_str().to_lowercase(), m.len()))
                .unzip();

            // the longest word is the min width of the column
            let min_width = *lengths
                .iter()
                .max()
                .context("failed to produce max field label width")?;
            Ok((label_words, min_width))
        };

        let (first, rest) = fields.split_first().context("no table fields given")?;

        // the first field needs +2 to its width for the "# " prefix
        let (label_words, min_width) = label_fn(first)?;
        labels.push(label_words);
        widths.push(min_width + 2);
        min_widths.push(min_width + 2);

        for field in rest {
            let (label_words, min_width) = label_fn(field)?;
            labels.push(label_words);
            widths.push(min_width);
            min_widths.push(min_width);
        }

        Ok(Self {
            fields: fields.to_vec(),
            labels,
            min_widths,
            widths,
        })
    }

    /// A format with every field, in declaration order.
    pub fn all_fields() -> anyhow::Result<Self> {
        Self::new(&Field::iter().collect::<Vec<Field>>())
    }

    pub fn update_widths(&mut self, summaries: &[SequenceSummary]) {
        summaries.iter().for_each(|summary| {
            self.fields.iter().enumerate().for_each(|(idx, field)| {
                let width = field.extract_from(summary).len();
                self.widths[idx] = self.widths[idx].max(width);
            });
        });
    }

    pub fn reset_widths(&mut self) {
        self.widths
            .iter_mut()
            .zip(self.min_widths.iter())
            .for_each(|(width, min_width)| *width = *min_width);
    }

    pub fn header(&self) -> anyhow::Result<String> {
        // the number of rows in the header is
        // the max number of words in a field
        let num_rows = self
            .labels
            .iter()
            .map(|l| l.len())
            .max()
            .context("field headers are empty")?;

        let mut header_row_strings: Vec<String> = vec!["# ".to_string(); num_rows + 1];

        // this function appends the field labels to the header
        let header_append_fn =
            |words: &Vec<String>, width: usize, header_row_strings: &mut Vec<String>| {
                let offset = num_rows - words.len();
                let mut words_padded = vec![""; offset];
                words.iter().for_each(|w| words_padded.push(w));

                words_padded.iter().enumerate().for_each(|(row, token)| {
                    let row_string = &mut header_row_strings[row];
                    *row_string = format!("{row_string}{:width$} ", token, width = width);
                });
                if let Some(last_row_string) = header_row_strings.last_mut() {
                    *last_row_string = format!("{last_row_string}{} ", "-".repeat(width));
                }
            };

        // the first column gets -2 to its width to account for the "# "
        header_append_fn(&self.labels[0], self.widths[0] - 2, &mut header_row_strings);

        self.labels
            .iter()
            .skip(1)
            .zip(self.widths.iter().skip(1))
            .for_each(|(words, &width)| {
                header_append_fn(words, width, &mut header_row_strings);
            });

        Ok(header_row_strings
            .iter()
            .map(|row| row.trim_end())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    pub fn row(&self, summary: &SequenceSummary) -> String {
        let mut tab_string = String::new();

        self.fields
            .iter()
            .zip(self.widths.iter())
            .for_each(|(field, width)| {
                let val = field.extract_from(summary);
                tab_string = format!("{tab_string}{val:width$} ", width = width)
            });

        tab_string.trim_end().to_string()
    }
}

/// Write one table row per aligned sequence, under a column header.
pub fn write_tabular_output(
    report: &Report,
    format: &mut TableFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let summaries = report.summaries();

    format.reset_widths();
    format.update_widths(&summaries);

    writeln!(out, "{}", format.header()?)?;
    for summary in summaries.iter() {
        writeln!(out, "{}", format.row(summary))?;
    }
    Ok(())
}
