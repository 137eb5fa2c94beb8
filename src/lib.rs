#![doc = r#"
romanwords — Roman-numeral arithmetic, spelled out in English.

Each input line has the form `NUMERAL OP NUMERAL` (for example `IV * IX`). Both
numerals are decoded with the classical pairwise subtractive rule, the operator
(`+ - * /`) is applied, and the result is written as capitalized English words
(`Thirty Six`), one output line per converted input line.

Two evaluation modes exist. `Mode::Lenient` (the default) never fails on bad
numerals or operators: unknown characters count as 0 and unknown operators,
division by zero and overflow all produce 0. `Mode::Strict` reports each of
those as an `Error` and skips the line instead.

Quick start: convert a file
---------------------------
```rust,no_run
use std::path::Path;
use romanwords::{process_file_to_path, ConversionParams, Mode};

fn main() -> romanwords::Result<()> {
    let params = ConversionParams {
        mode: Mode::Strict,
        fail_fast: false,
    };

    let report = process_file_to_path(Path::new("input.txt"), Path::new("output.txt"), &params)?;
    println!("written={} skipped={} errors={}", report.written, report.skipped, report.errors);
    Ok(())
}
```

Single lines and building blocks
--------------------------------
```rust
use romanwords::{decode, evaluate, process_line, spell, Mode};

assert_eq!(decode("MCMXCIV"), 1994);
assert_eq!(evaluate(10, 0, '/'), 0);
assert_eq!(spell(1994), "One Thousand Nine Hundred Ninety Four");
assert_eq!(process_line("X + V", Mode::Lenient).unwrap(), "Fifteen");
```

Error handling
--------------
All fallible functions return `romanwords::Result<T>`. Only `Error::OpenInput`,
`Error::OpenOutput` and `Error::Io` end a batch run; the rest describe a single
line.

Useful modules
--------------
- [`api`] — batch entry points.
- [`core`] — decoder, evaluator, speller and the line pipeline.
- [`types`] — `Mode`, `Operator`, `BatchState`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::arith::{evaluate, try_evaluate};
pub use crate::core::line::{OperationRecord, parse_line, process_line};
pub use crate::core::numeral::{decode, numeral_value, try_decode};
pub use crate::core::params::ConversionParams;
pub use crate::core::words::{spell, spell_signed};
pub use error::{Error, Result};
pub use types::{BatchState, Mode, Operator};

pub use api::{BatchReport, process_file_to_path, process_lines};
