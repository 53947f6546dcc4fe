//! Line-protocol server
//!
//! Protocol (one command per line, fields separated by a single space so an
//! empty field is two adjacent spaces):
//! - `MERGE <s1> <s2>`: print `OK <palindrome>`.
//! - `SORTED <ordering> <w1> <w2> ...`: `<ordering>` is one word listing the
//!   symbols lowest first; print `OK true` or `OK false`.
//! - `COUNT <text> <l1,l2,..> <u1,u2,..>`: print `OK <c1> <c2> ...`.
//! - `RANGESUM <low> <high> <v1> <v2> ...`: insert the values into a BST and
//!   print `OK <sum>`.
//! - `NGRAMS <k> <line...>`: print `OK <w:n ...> | <a b:n ...>`.
//! - `FLATTEN <json...>`: print `OK <key=value ...>`.
//! - `QUIT`: exit without a response.
//!
//! Any failure prints `ERR <message>` and the server keeps reading.

use std::io::{BufRead, Write};

use crate::bst::Bst;
use crate::config::Config;
use crate::counting::count_palindromes_with;
use crate::error::{KataError, Result};
use crate::flatten::flatten_json_str;
use crate::merge::merge_palindromes;
use crate::ngrams::top_ngrams;
use crate::ordering::are_words_sorted_by;

/// One parsed protocol line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Merge {
        s1: String,
        s2: String,
    },
    Sorted {
        ordering: Vec<char>,
        words: Vec<String>,
    },
    Count {
        text: String,
        lower: Vec<usize>,
        upper: Vec<usize>,
    },
    RangeSum {
        low: i64,
        high: i64,
        values: Vec<i64>,
    },
    Ngrams {
        k: usize,
        line: String,
    },
    Flatten {
        json: String,
    },
    Quit,
}

impl Command {
    /// Parse one line; the trailing newline is optional.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\n', '\r']);
        let (name, rest) = line.split_once(' ').unwrap_or((line, ""));

        match name {
            "MERGE" => {
                let (s1, s2) = rest
                    .split_once(' ')
                    .ok_or_else(|| KataError::protocol("MERGE needs two fields"))?;
                Ok(Command::Merge {
                    s1: s1.to_owned(),
                    s2: s2.to_owned(),
                })
            }
            "SORTED" => {
                let mut fields = rest.split(' ');
                let ordering = fields
                    .next()
                    .filter(|f| !f.is_empty())
                    .ok_or_else(|| KataError::protocol("SORTED needs an ordering"))?;
                Ok(Command::Sorted {
                    ordering: ordering.chars().collect(),
                    words: fields.map(str::to_owned).collect(),
                })
            }
            "COUNT" => {
                let fields: Vec<&str> = rest.split(' ').collect();
                let &[text, lower, upper] = fields.as_slice() else {
                    return Err(KataError::protocol(format!(
                        "COUNT needs 3 fields, got {}",
                        fields.len()
                    )));
                };
                Ok(Command::Count {
                    text: text.to_owned(),
                    lower: parse_list(lower)?,
                    upper: parse_list(upper)?,
                })
            }
            "RANGESUM" => {
                let mut fields = rest.split(' ').filter(|f| !f.is_empty());
                let mut next_i64 = |what: &str| -> Result<i64> {
                    let field = fields
                        .next()
                        .ok_or_else(|| KataError::protocol(format!("RANGESUM needs {what}")))?;
                    parse_num(field)
                };
                let low = next_i64("a low bound")?;
                let high = next_i64("a high bound")?;
                let values = fields.map(parse_num).collect::<Result<Vec<i64>>>()?;
                Ok(Command::RangeSum { low, high, values })
            }
            "NGRAMS" => {
                let (k, line) = rest.split_once(' ').unwrap_or((rest, ""));
                Ok(Command::Ngrams {
                    k: parse_num(k)?,
                    line: line.to_owned(),
                })
            }
            "FLATTEN" => Ok(Command::Flatten {
                json: rest.to_owned(),
            }),
            "QUIT" => Ok(Command::Quit),
            other => Err(KataError::protocol(format!("unknown command {other:?}"))),
        }
    }

    /// Run the command and render its `OK` payload.
    pub fn execute(&self, config: &Config) -> Result<String> {
        match self {
            Command::Merge { s1, s2 } => merge_palindromes(s1, s2, config.alphabet),
            Command::Sorted { ordering, words } => {
                are_words_sorted_by(words, ordering, config.alphabet).map(|b| b.to_string())
            }
            Command::Count { text, lower, upper } => {
                let counts = count_palindromes_with(config.count_strategy, text, lower, upper)?;
                Ok(join(counts.iter()))
            }
            Command::RangeSum { low, high, values } => {
                let tree: Bst = values.iter().copied().collect();
                Ok(tree.range_sum(*low, *high).to_string())
            }
            Command::Ngrams { k, line } => Ok(top_ngrams(line, *k).to_string()),
            Command::Flatten { json } => {
                let record = flatten_json_str(json, &config.flatten_delimiter)?;
                Ok(join(record.iter().map(|(k, v)| format!("{k}={v}"))))
            }
            Command::Quit => Ok(String::new()),
        }
    }
}

fn join<T: ToString>(items: impl Iterator<Item = T>) -> String {
    items.map(|t| t.to_string()).collect::<Vec<_>>().join(" ")
}

fn parse_num<T: std::str::FromStr>(field: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    field
        .parse()
        .map_err(|e| KataError::protocol(format!("bad number {field:?}: {e}")))
}

fn parse_list(field: &str) -> Result<Vec<usize>> {
    if field.is_empty() {
        return Ok(Vec::new());
    }
    field.split(',').map(parse_num).collect()
}

/// Serve commands from `reader` until `QUIT` or EOF, writing one response
/// line per command to `writer`. Returns the number of commands answered.
pub fn serve<R: BufRead, W: Write>(mut reader: R, mut writer: W, config: &Config) -> Result<u64> {
    let mut line = String::with_capacity(256);
    let mut answered = 0u64;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            // EOF
            break;
        }

        let response = match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(cmd) => {
                log::debug!("command: {:?}", cmd);
                cmd.execute(config)
            }
            Err(e) => Err(e),
        };

        match response {
            Ok(payload) => writeln!(writer, "OK {payload}")?,
            Err(e) => {
                log::warn!("rejected {:?}: {}", line.trim_end(), e);
                writeln!(writer, "ERR {e}")?;
            }
        }
        writer.flush()?;
        answered += 1;
    }

    Ok(answered)
}

/// [`serve`] on locked stdin/stdout.
pub fn run_server(config: &Config) -> Result<u64> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    serve(stdin.lock(), std::io::BufWriter::new(stdout.lock()), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use std::io::Cursor;

    fn session(input: &str, config: &Config) -> (u64, Vec<String>) {
        let mut out = Vec::new();
        let answered = serve(Cursor::new(input), &mut out, config).unwrap();
        let text = String::from_utf8(out).unwrap();
        (answered, text.lines().map(str::to_owned).collect())
    }

    #[test]
    fn answers_every_routine() {
        let input = "MERGE aabb bcdc\n\
                     SORTED cba cc cb bc ac acb\n\
                     SORTED bca cc cb bc ac acb\n\
                     COUNT abcd 1,1,3 3,2,4\n\
                     RANGESUM 3 10 6 4 8 3 5 7 9 2\n\
                     NGRAMS 1 to be or not to be\n\
                     FLATTEN {\"a\": {\"b\": 1}, \"c\": \"d e\"}\n\
                     QUIT\n";
        let (answered, lines) = session(input, &Config::default());
        assert_eq!(answered, 7);
        assert_eq!(
            lines,
            vec![
                "OK abcbcba",
                "OK true",
                "OK false",
                "OK 4 4 0",
                "OK 42",
                "OK to:2 | to be:2",
                "OK a_b=1 c=d e",
            ]
        );
    }

    #[test]
    fn empty_fields_are_preserved() {
        let (_, lines) = session("MERGE  \nMERGE  aba\n", &Config::default());
        assert_eq!(lines, vec!["OK ", "OK aba"]);
    }

    #[test]
    fn errors_do_not_stop_the_server() {
        let input = "FROB\nCOUNT abc 1,2 3\nMERGE aZ b\nRANGESUM 1\nMERGE a a\n";
        let (answered, lines) = session(input, &Config::default());
        assert_eq!(answered, 5);
        assert!(lines[0].starts_with("ERR malformed command"));
        assert!(lines[1].starts_with("ERR invalid argument"));
        assert!(lines[2].starts_with("ERR symbol 'Z'"));
        assert!(lines[3].starts_with("ERR malformed command"));
        assert_eq!(lines[4], "OK aa");
    }

    #[test]
    fn rangesum_handles_ascending_values() {
        let values: Vec<String> = (1..=100_000).map(|v: i64| v.to_string()).collect();
        let input = format!("RANGESUM 1 100000 {}\nCOUNT ab 0 2\n", values.join(" "));
        let (_, lines) = session(&input, &Config::default());
        assert_eq!(lines, vec!["OK 5000050000", "OK 5"]);
    }

    #[test]
    fn stops_at_quit() {
        let (answered, lines) = session("QUIT\nMERGE a a\n", &Config::default());
        assert_eq!(answered, 0);
        assert!(lines.is_empty());
    }

    #[test]
    fn uses_configured_alphabet_and_strategy() {
        let config = Config {
            alphabet: Alphabet::Byte,
            count_strategy: crate::counting::CountStrategy::Enumerate,
            ..Config::default()
        };
        let (_, lines) = session("MERGE AA B\nCOUNT noon 2 4\n", &config);
        assert_eq!(lines, vec!["OK ABA", "OK 2"]);
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            Command::parse("COUNT xyz  \r\n").unwrap(),
            Command::Count {
                text: "xyz".to_owned(),
                lower: vec![],
                upper: vec![],
            }
        );
        assert_eq!(
            Command::parse("RANGESUM -3 3").unwrap(),
            Command::RangeSum {
                low: -3,
                high: 3,
                values: vec![],
            }
        );
        assert!(Command::parse("SORTED").is_err());
        assert!(Command::parse("NGRAMS x hello").is_err());
    }
}
