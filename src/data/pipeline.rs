// ============================================================
// Layer 4 — Transform Pipeline
// ============================================================
// Assembles the stages in their one valid order and runs
// them over the text column:
//
//   lowercase
//       │
//   remove-numbers        (must precede punctuation removal)
//       │
//   remove-punctuation
//       │
//   [remove-stopwords]    if stop
//       │
//   [stem | lemmatize]    per WordNormalization
//
// The order is fixed here; options can only switch the
// optional stages on or off, never reorder them.

use serde::Serialize;

use crate::data::lemmatizer::NounLemmatizer;
use crate::data::stemmer::SnowballStemmer;
use crate::data::stopwords::StopwordSet;
use crate::data::transforms::{
    Lowercase, NormalizeWords, RemoveNumbers, RemovePunctuation, RemoveStopwords,
};
use crate::domain::options::{SpaceCollapse, WordNormalization};
use crate::domain::record_table::TextColumn;
use crate::domain::traits::TextTransform;

/// The subset of the run configuration that shapes the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineOptions {
    pub stop:           bool,
    pub normalization:  WordNormalization,
    pub space_collapse: SpaceCollapse,
}

pub struct TransformPipeline {
    stages: Vec<Box<dyn TextTransform>>,
}

impl TransformPipeline {
    pub fn new(options: PipelineOptions) -> Result<Self, regex::Error> {
        let mut stages: Vec<Box<dyn TextTransform>> = vec![
            Box::new(Lowercase),
            Box::new(RemoveNumbers::new()?),
            Box::new(RemovePunctuation::new(options.space_collapse)?),
        ];

        if options.stop {
            stages.push(Box::new(RemoveStopwords::new(StopwordSet::english())));
        }

        match options.normalization {
            WordNormalization::None => {}
            WordNormalization::Stem => stages.push(Box::new(NormalizeWords::new(
                "stem",
                Box::new(SnowballStemmer::english()),
            ))),
            WordNormalization::Lemmatize => stages.push(Box::new(NormalizeWords::new(
                "lemmatize",
                Box::new(NounLemmatizer::new()),
            ))),
        }

        Ok(Self { stages })
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage over the column in place.
    pub fn run(&self, column: &mut TextColumn) {
        let rows = column.len();
        for stage in &self.stages {
            column.map_in_place(|value| stage.apply(value));
            debug_assert_eq!(column.len(), rows);
            tracing::info!("Applied '{}' to {} rows", stage.name(), rows);
        }
    }

    /// Run every stage over a single value.
    #[cfg(test)]
    pub fn apply(&self, text: &str) -> String {
        self.stages
            .iter()
            .fold(text.to_string(), |acc, stage| stage.apply(&acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline(stop: bool, normalization: WordNormalization) -> TransformPipeline {
        TransformPipeline::new(PipelineOptions {
            stop,
            normalization,
            space_collapse: SpaceCollapse::Pairwise,
        })
        .unwrap()
    }

    #[test]
    fn test_stage_order_is_fixed() {
        assert_eq!(
            pipeline(true, WordNormalization::Stem).stage_names(),
            vec!["lowercase", "remove-numbers", "remove-punctuation", "remove-stopwords", "stem"]
        );
        assert_eq!(
            pipeline(false, WordNormalization::Lemmatize).stage_names(),
            vec!["lowercase", "remove-numbers", "remove-punctuation", "lemmatize"]
        );
        assert_eq!(pipeline(false, WordNormalization::None).stage_names().len(), 3);
    }

    #[test]
    fn test_serial_number_scenario() {
        let p = pipeline(false, WordNormalization::None);
        assert_eq!(p.apply("Item: 59-4-2-25, damaged."), "item damaged");
    }

    #[test]
    fn test_date_range_scenario() {
        let p = pipeline(false, WordNormalization::None);
        let out = p.apply("AD 1530-1");
        assert_eq!(out.split_whitespace().collect::<Vec<_>>(), vec!["ad"]);
    }

    #[test]
    fn test_row_count_preserved() {
        let p = pipeline(true, WordNormalization::Stem);
        let mut col: TextColumn = ["The 3 pots", "", "12345", "and the"].into_iter().collect();
        p.run(&mut col);
        assert_eq!(col.len(), 4);
        assert_eq!(col.values()[0], "pot");
        assert_eq!(col.values()[3], "");
    }

    #[test]
    fn test_lemma_scenario() {
        let p = pipeline(false, WordNormalization::Lemmatize);
        let mut col: TextColumn = ["cats running", "cat runs"].into_iter().collect();
        p.run(&mut col);
        assert_eq!(col.values(), &["cat running".to_string(), "cat run".to_string()]);
    }

    #[test]
    fn test_stopwords_then_lemma() {
        let p = pipeline(true, WordNormalization::Lemmatize);
        assert_eq!(p.apply("The Boxes of the Children"), "box child");
    }
}
