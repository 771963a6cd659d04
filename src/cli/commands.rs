// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Every flag the binary accepts.
//
// The three switches come in --x / --no-x pairs. Whichever
// appears last wins, so `--stem --no-stem --lemma` is fine.
// Only when both --stem and --lemma are still on after that
// does conversion fail with a configuration error.
//
// clap value enums live here so the application layer never
// sees clap types.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::application::preprocess_use_case::{
    PreprocessConfig, DEFAULT_COLUMN, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR,
};
use crate::data::pipeline::PipelineOptions;
use crate::domain::error::PreprocessError;
use crate::domain::options::{InputEncoding, SpaceCollapse, WordNormalization};

#[derive(Args, Debug, Clone)]
pub struct PreprocessArgs {
    /// Apply stopword removal
    #[arg(long, overrides_with = "no_stop")]
    pub stop: bool,

    #[arg(long = "no-stop", overrides_with = "stop")]
    pub no_stop: bool,

    /// Apply stemming (cannot be combined with --lemma)
    #[arg(long, overrides_with = "no_stem")]
    pub stem: bool,

    #[arg(long = "no-stem", overrides_with = "stem")]
    pub no_stem: bool,

    /// Apply lemmatization (cannot be combined with --stem)
    #[arg(long, overrides_with = "no_lemma")]
    pub lemma: bool,

    #[arg(long = "no-lemma", overrides_with = "lemma")]
    pub no_lemma: bool,

    /// CSV file to read
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Name of the column to clean
    #[arg(long, default_value = DEFAULT_COLUMN)]
    pub column: String,

    /// Text encoding of the input file
    #[arg(long, value_enum, default_value_t = EncodingArg::Latin1)]
    pub encoding: EncodingArg,

    /// Directory for the output files (created if missing)
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// How whitespace is tidied after punctuation removal:
    /// `pairwise` turns each pair of spaces into one, `full` squeezes every run
    #[arg(long, value_enum, default_value_t = CollapseArg::Pairwise)]
    pub space_collapse: CollapseArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingArg {
    Latin1,
    Utf8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseArg {
    Pairwise,
    Full,
}

impl From<EncodingArg> for InputEncoding {
    fn from(a: EncodingArg) -> Self {
        match a {
            EncodingArg::Latin1 => InputEncoding::Latin1,
            EncodingArg::Utf8 => InputEncoding::Utf8,
        }
    }
}

impl From<CollapseArg> for SpaceCollapse {
    fn from(a: CollapseArg) -> Self {
        match a {
            CollapseArg::Pairwise => SpaceCollapse::Pairwise,
            CollapseArg::Full => SpaceCollapse::Full,
        }
    }
}

/// The boundary between Layer 1 and Layer 2. Fails only on
/// the stem/lemma conflict.
impl TryFrom<PreprocessArgs> for PreprocessConfig {
    type Error = PreprocessError;

    fn try_from(a: PreprocessArgs) -> Result<Self, Self::Error> {
        let normalization = WordNormalization::from_flags(a.stem, a.lemma)?;
        Ok(PreprocessConfig {
            input:      a.input,
            column:     a.column,
            encoding:   a.encoding.into(),
            output_dir: a.output_dir,
            pipeline:   PipelineOptions {
                stop: a.stop,
                normalization,
                space_collapse: a.space_collapse.into(),
            },
        })
    }
}
