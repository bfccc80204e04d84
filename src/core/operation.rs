//! Named operations
//!
//! Maps operation names onto the functions in [`super::arrays`] so callers
//! outside the library (the CLI, JSON payloads) can pick one at runtime.

use super::arrays;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Shape of the values an operation consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Numbers,
    Texts,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Numbers => "numbers",
            InputKind::Texts => "texts",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    BookEnd,
    Triple,
    ToIntegers,
    RemoveDollars,
    Shout,
    CountShort,
    AllRgb,
    MakeMath,
    InjectPositive,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::BookEnd,
        Operation::Triple,
        Operation::ToIntegers,
        Operation::RemoveDollars,
        Operation::Shout,
        Operation::CountShort,
        Operation::AllRgb,
        Operation::MakeMath,
        Operation::InjectPositive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::BookEnd => "book-end",
            Operation::Triple => "triple",
            Operation::ToIntegers => "to-integers",
            Operation::RemoveDollars => "remove-dollars",
            Operation::Shout => "shout",
            Operation::CountShort => "count-short",
            Operation::AllRgb => "all-rgb",
            Operation::MakeMath => "make-math",
            Operation::InjectPositive => "inject-positive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Operation::BookEnd => "First and last number",
            Operation::Triple => "Multiply every number by 3",
            Operation::ToIntegers => "Parse integer prefixes, 0 when missing",
            Operation::RemoveDollars => "Strip a leading '$' and parse",
            Operation::Shout => "Uppercase '!' messages, drop '?' messages",
            Operation::CountShort => "Count words under 4 characters",
            Operation::AllRgb => "Whether every color is red, blue or green",
            Operation::MakeMath => "Render the sum as an addition",
            Operation::InjectPositive => "Insert the running sum after the first negative",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            Operation::BookEnd
            | Operation::Triple
            | Operation::MakeMath
            | Operation::InjectPositive => InputKind::Numbers,
            Operation::ToIntegers
            | Operation::RemoveDollars
            | Operation::Shout
            | Operation::CountShort
            | Operation::AllRgb => InputKind::Texts,
        }
    }

    /// Run the operation on `input`
    ///
    /// Fails only when the input kind does not match [`Operation::input_kind`].
    pub fn apply(&self, input: &Input) -> Result<Output> {
        debug!("Applying {} to {} values", self.name(), input.len());

        let output = match (self, input) {
            (Operation::BookEnd, Input::Numbers(n)) => Output::Numbers(arrays::book_end_list(n)),
            (Operation::Triple, Input::Numbers(n)) => Output::Numbers(arrays::triple_numbers(n)),
            (Operation::MakeMath, Input::Numbers(n)) => Output::Text(arrays::make_math(n)),
            (Operation::InjectPositive, Input::Numbers(n)) => {
                Output::Numbers(arrays::inject_positive(n))
            }
            (Operation::ToIntegers, Input::Texts(t)) => {
                Output::Integers(arrays::strings_to_integers(t))
            }
            (Operation::RemoveDollars, Input::Texts(t)) => {
                Output::Integers(arrays::remove_dollars(t))
            }
            (Operation::Shout, Input::Texts(t)) => Output::Texts(arrays::shout_if_exclaiming(t)),
            (Operation::CountShort, Input::Texts(t)) => Output::Count(arrays::count_short_words(t)),
            (Operation::AllRgb, Input::Texts(t)) => Output::Flag(arrays::all_rgb(t)),
            _ => {
                return Err(Error::InputKindMismatch {
                    operation: self.name(),
                    expected: self.input_kind().as_str(),
                    actual: input.kind().as_str(),
                })
            }
        };

        Ok(output)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| Error::UnknownOperation(s.to_string()))
    }
}

/// Values handed to an [`Operation`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Input {
    Numbers(Vec<f64>),
    Texts(Vec<String>),
}

impl Input {
    /// Build an input from raw command-line values
    ///
    /// Numbers must parse completely and be finite; the lenient prefix
    /// parsing is reserved for the `to-integers` and `remove-dollars`
    /// operations themselves.
    pub fn from_args(kind: InputKind, values: &[String]) -> Result<Self> {
        match kind {
            InputKind::Numbers => values
                .iter()
                .map(|v| {
                    v.trim()
                        .parse::<f64>()
                        .ok()
                        .filter(|n| n.is_finite())
                        .ok_or_else(|| Error::InvalidNumber(v.clone()))
                })
                .collect::<Result<Vec<_>>>()
                .map(Input::Numbers),
            InputKind::Texts => Ok(Input::Texts(values.to_vec())),
        }
    }

    /// Build an input from a JSON array
    pub fn from_json(kind: InputKind, json: &str) -> Result<Self> {
        match kind {
            InputKind::Numbers => Ok(Input::Numbers(serde_json::from_str(json)?)),
            InputKind::Texts => Ok(Input::Texts(serde_json::from_str(json)?)),
        }
    }

    pub fn kind(&self) -> InputKind {
        match self {
            Input::Numbers(_) => InputKind::Numbers,
            Input::Texts(_) => InputKind::Texts,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Input::Numbers(n) => n.len(),
            Input::Texts(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of an [`Operation`]
///
/// Whole numbers serialize as JSON integers, so `[1.0, 4.0]` is written as
/// `[1,4]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Output {
    Numbers(#[serde(serialize_with = "serialize_numbers")] Vec<f64>),
    Integers(Vec<i64>),
    Texts(Vec<String>),
    Count(usize),
    Flag(bool),
    Text(String),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Numbers(numbers) => {
                let rendered: Vec<String> =
                    numbers.iter().map(|&n| arrays::format_number(n)).collect();
                write!(f, "{}", rendered.join(","))
            }
            Output::Integers(numbers) => {
                let rendered: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
                write!(f, "{}", rendered.join(","))
            }
            Output::Texts(texts) => write!(f, "{}", texts.join(",")),
            Output::Count(count) => write!(f, "{}", count),
            Output::Flag(flag) => write!(f, "{}", flag),
            Output::Text(text) => f.write_str(text),
        }
    }
}

/// Largest magnitude below which every whole `f64` is an exact integer
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn serialize_numbers<S>(numbers: &[f64], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(numbers.iter().map(|&n| JsonNumber(n)))
}

struct JsonNumber(f64);

impl Serialize for JsonNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let n = self.0;
        if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(n as i64)
        } else {
            serializer.serialize_f64(n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(values: &[&str]) -> Input {
        Input::Texts(values.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_names_round_trip_through_from_str() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>(), Ok(op));
        }
        assert_eq!(
            "bogus".parse::<Operation>(),
            Err(Error::UnknownOperation("bogus".to_string()))
        );
    }

    #[test]
    fn test_serde_names_match_cli_names() {
        for op in Operation::ALL {
            let json = serde_json::to_string(&op).unwrap();
            assert_eq!(json, format!("\"{}\"", op.name()));
        }
    }

    #[test]
    fn test_apply_numeric_operations() {
        let input = Input::Numbers(vec![1.0, 9.0, -5.0, 7.0]);

        assert_eq!(
            Operation::BookEnd.apply(&input),
            Ok(Output::Numbers(vec![1.0, 7.0]))
        );
        assert_eq!(
            Operation::Triple.apply(&input),
            Ok(Output::Numbers(vec![3.0, 27.0, -15.0, 21.0]))
        );
        assert_eq!(
            Operation::MakeMath.apply(&input),
            Ok(Output::Text("12=1+9+-5+7".to_string()))
        );
        assert_eq!(
            Operation::InjectPositive.apply(&input),
            Ok(Output::Numbers(vec![1.0, 9.0, -5.0, 10.0, 7.0]))
        );
    }

    #[test]
    fn test_apply_fractional_numbers() {
        let input = Input::Numbers(vec![1.5, 2.0]);
        assert_eq!(
            Operation::Triple.apply(&input),
            Ok(Output::Numbers(vec![4.5, 6.0]))
        );
        assert_eq!(
            Operation::MakeMath.apply(&input),
            Ok(Output::Text("3.5=1.5+2".to_string()))
        );
    }

    #[test]
    fn test_apply_text_operations() {
        assert_eq!(
            Operation::ToIntegers.apply(&texts(&["1", "2", "abc"])),
            Ok(Output::Integers(vec![1, 2, 0]))
        );
        assert_eq!(
            Operation::RemoveDollars.apply(&texts(&["$1", "2", "$abc"])),
            Ok(Output::Integers(vec![1, 2, 0]))
        );
        assert_eq!(
            Operation::Shout.apply(&texts(&["hi!", "what?", "ok"])),
            Ok(Output::Texts(vec!["HI!".to_string(), "ok".to_string()]))
        );
        assert_eq!(
            Operation::CountShort.apply(&texts(&["a", "abc", "abcd"])),
            Ok(Output::Count(2))
        );
        assert_eq!(
            Operation::AllRgb.apply(&texts(&["red", "yellow"])),
            Ok(Output::Flag(false))
        );
    }

    #[test]
    fn test_apply_rejects_wrong_input_kind() {
        let result = Operation::Triple.apply(&texts(&["1"]));
        assert_eq!(
            result,
            Err(Error::InputKindMismatch {
                operation: "triple",
                expected: "numbers",
                actual: "texts",
            })
        );

        let result = Operation::Shout.apply(&Input::Numbers(vec![1.0]));
        assert!(matches!(result, Err(Error::InputKindMismatch { .. })));
    }

    #[test]
    fn test_input_from_args() {
        let values = vec!["1".to_string(), "-5".to_string()];
        assert_eq!(
            Input::from_args(InputKind::Numbers, &values),
            Ok(Input::Numbers(vec![1.0, -5.0]))
        );
        assert_eq!(
            Input::from_args(InputKind::Texts, &values),
            Ok(texts(&["1", "-5"]))
        );

        let fractions = vec!["1.5".to_string(), "-0.25".to_string(), "2e3".to_string()];
        assert_eq!(
            Input::from_args(InputKind::Numbers, &fractions),
            Ok(Input::Numbers(vec![1.5, -0.25, 2000.0]))
        );

        let bad = vec!["1".to_string(), "2x".to_string()];
        assert_eq!(
            Input::from_args(InputKind::Numbers, &bad),
            Err(Error::InvalidNumber("2x".to_string()))
        );
    }

    #[test]
    fn test_input_from_args_rejects_non_finite() {
        for value in ["NaN", "inf", "-infinity"] {
            assert_eq!(
                Input::from_args(InputKind::Numbers, &[value.to_string()]),
                Err(Error::InvalidNumber(value.to_string()))
            );
        }
    }

    #[test]
    fn test_input_from_json() {
        assert_eq!(
            Input::from_json(InputKind::Numbers, "[1, 2, 3]"),
            Ok(Input::Numbers(vec![1.0, 2.0, 3.0]))
        );
        assert_eq!(
            Input::from_json(InputKind::Numbers, "[1.5, 2]"),
            Ok(Input::Numbers(vec![1.5, 2.0]))
        );
        assert_eq!(
            Input::from_json(InputKind::Texts, r#"["red", "blue"]"#),
            Ok(texts(&["red", "blue"]))
        );
        assert!(matches!(
            Input::from_json(InputKind::Numbers, r#"["1"]"#),
            Err(Error::Json(_))
        ));
        assert!(Input::from_json(InputKind::Texts, "[]").unwrap().is_empty());
    }

    #[test]
    fn test_output_display_and_json() {
        assert_eq!(Output::Numbers(vec![1.0, -2.0, 3.5]).to_string(), "1,-2,3.5");
        assert_eq!(Output::Numbers(vec![]).to_string(), "");
        assert_eq!(Output::Integers(vec![1, 2, 0]).to_string(), "1,2,0");
        assert_eq!(
            Output::Texts(vec!["HI!".to_string(), "ok".to_string()]).to_string(),
            "HI!,ok"
        );
        assert_eq!(Output::Count(2).to_string(), "2");
        assert_eq!(Output::Flag(true).to_string(), "true");
        assert_eq!(Output::Text("0=0".to_string()).to_string(), "0=0");

        assert_eq!(
            serde_json::to_string(&Output::Numbers(vec![1.0, 4.0])).unwrap(),
            "[1,4]"
        );
        assert_eq!(
            serde_json::to_string(&Output::Numbers(vec![4.5, -0.0, 1e300])).unwrap(),
            "[4.5,0,1e300]"
        );
        assert_eq!(
            serde_json::to_string(&Output::Integers(vec![1, 2, 0])).unwrap(),
            "[1,2,0]"
        );
        assert_eq!(
            serde_json::to_string(&Output::Text("6=1+2+3".to_string())).unwrap(),
            "\"6=1+2+3\""
        );
        assert_eq!(serde_json::to_string(&Output::Flag(false)).unwrap(), "false");
    }
}
