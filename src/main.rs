//! Interactive stable matching session.
//!
//! Collects two equal-size sets of named agents and their full preference
//! rankings from stdin, prints the stable matching the engine settles on,
//! and optionally times repeated runs on the collected instance.
//!
//! ## Session Shape
//!
//! 1. Ask for the agent count n
//! 2. Ask for n unique names per set
//! 3. For each agent, rank the opposite set through repeated menu picks
//! 4. Print the matching
//! 5. Optionally time a single run or the best-of-three batch average
//!
//! Names exist only in this binary; the engine works on the dense indices
//! assigned in entry order. Run with `RUST_LOG=debug` for the engine's
//! per-run summary lines.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use stable_match::{Matching, MatchingEngine, PreferenceTable, MIN_AGENTS};

/// Upper bound offered by the count prompt. The engine itself has no upper
/// limit; this keeps a hand-typed session manageable.
const MAX_AGENTS: usize = 100;

/// Runs per timing batch in averaged mode.
const BATCH_RUNS: u32 = 1_000;

/// Number of timing batches; the fastest batch wins.
const BATCHES: u32 = 3;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let n = prompt_integer(
        &mut input,
        "How many elements are in each set?",
        MIN_AGENTS,
        MAX_AGENTS,
    )?;

    println!("\nFirst, provide the elements from set X:\n");
    let names_x = collect_names(&mut input, n, "X")?;

    println!("\nNow, provide the elements from set Y:\n");
    let names_y = collect_names(&mut input, n, "Y")?;

    println!("\nNext, provide the preferences for the elements of set X:");
    let lists_x = collect_preferences(&mut input, &names_x, &names_y)?;

    println!("\nLastly, provide the preferences for the elements of set Y:");
    let lists_y = collect_preferences(&mut input, &names_y, &names_x)?;

    let engine = MatchingEngine::new(
        PreferenceTable::new(lists_x)?,
        PreferenceTable::new(lists_y)?,
    )?;

    let result = engine.find_matching();
    display_matching(&result.matching, &names_x, &names_y);

    let answer = prompt_line(
        &mut input,
        "\nWould you also like to measure the performance? (y/n)",
    )?;
    if answer.eq_ignore_ascii_case("y") {
        measure_session(&mut input, &engine)?;
    }

    println!("\nPress enter to exit ...");
    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(())
}

// ============================================================================
// Prompt helpers
// ============================================================================

/// Print `prompt` on its own line and read one trimmed answer.
///
/// Answers are typed on a tab-indented line below the prompt. An empty
/// prompt skips the heading (used right after an inline menu).
fn prompt_line(input: &mut impl BufRead, prompt: &str) -> io::Result<String> {
    if !prompt.is_empty() {
        println!("{prompt}");
    }
    print!("\t");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before the session finished",
        ));
    }
    Ok(line.trim().to_string())
}

/// Ask until the answer parses as an integer in `min..=max`.
fn prompt_integer(
    input: &mut impl BufRead,
    prompt: &str,
    min: usize,
    max: usize,
) -> io::Result<usize> {
    loop {
        match prompt_line(input, prompt)?.parse::<usize>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(value),
            _ => println!("INVALID: Please enter an integer\nfrom {min} to {max}."),
        }
    }
}

/// Ask until the answer is a non-empty name not already in `taken`.
fn prompt_name(input: &mut impl BufRead, prompt: &str, taken: &[String]) -> io::Result<String> {
    loop {
        let name = prompt_line(input, prompt)?;
        if !name.is_empty() && !taken.contains(&name) {
            return Ok(name);
        }
        println!("INVALID: Please enter a valid name.");
    }
}

// ============================================================================
// Input collection
// ============================================================================

/// Collect `n` unique names for one set.
fn collect_names(input: &mut impl BufRead, n: usize, set_label: &str) -> io::Result<Vec<String>> {
    let mut names = Vec::with_capacity(n);
    for i in 1..=n {
        let prompt = format!("What is the name of element #{i} from set {set_label}?");
        let name = prompt_name(input, &prompt, &names)?;
        names.push(name);
    }
    Ok(names)
}

/// Build one side's raw preference lists through repeated menu picks.
///
/// Each agent ranks the opposite set from most to least preferred: the menu
/// lists the candidates not ranked yet, each pick moves one into the agent's
/// list, and the last survivor is appended without asking. Every list is a
/// permutation by construction.
fn collect_preferences(
    input: &mut impl BufRead,
    agents: &[String],
    opposite: &[String],
) -> io::Result<Vec<Vec<usize>>> {
    let mut lists = Vec::with_capacity(agents.len());

    for agent in agents {
        println!("\nNow for the preferences of {agent}:\n");

        let mut remaining: Vec<usize> = (0..opposite.len()).collect();
        let mut list = Vec::with_capacity(opposite.len());

        while remaining.len() > 1 {
            println!("Type the number of the next highest preference for {agent}:");
            for (i, &candidate) in remaining.iter().enumerate() {
                println!("{} ({})", opposite[candidate], i + 1);
            }
            let pick = prompt_integer(input, "", 1, remaining.len())?;
            list.push(remaining.remove(pick - 1));
        }
        if let Some(last) = remaining.pop() {
            list.push(last);
        }

        lists.push(list);
    }

    Ok(lists)
}

// ============================================================================
// Output and timing
// ============================================================================

/// Print each pair as "<X name> matched with <Y name>".
fn display_matching(matching: &Matching, names_x: &[String], names_y: &[String]) {
    println!("\n\nA possible stable matching between set X and set Y is:");
    for (proposer, reviewer) in matching.pairs() {
        println!("{} matched with {}", names_x[proposer], names_y[reviewer]);
    }
}

/// Ask which timing mode to run, execute it, and report the per-run time
/// in microseconds.
fn measure_session(input: &mut impl BufRead, engine: &MatchingEngine) -> io::Result<()> {
    let mode = prompt_line(
        input,
        "\nDo you want to time a single execution or\ntime the average of repeated executions? (s/a)",
    )?;
    let average = mode.eq_ignore_ascii_case("a");

    let label = if average { "average" } else { "single execution" };
    println!("Measuring {label} performance ...");

    let per_run = if average {
        measure_average(engine)
    } else {
        measure_single(engine)
    };

    println!(
        "\nThe stable matching was determined in about\n{:.3} microseconds.",
        per_run.as_secs_f64() * 1_000_000.0
    );
    Ok(())
}

/// Time one full matching run.
fn measure_single(engine: &MatchingEngine) -> Duration {
    let start = Instant::now();
    std::hint::black_box(engine.find_matching());
    start.elapsed()
}

/// Time `BATCHES` batches of `BATCH_RUNS` runs each and return the per-run
/// time of the fastest batch.
fn measure_average(engine: &MatchingEngine) -> Duration {
    let mut best: Option<Duration> = None;

    for _ in 0..BATCHES {
        let start = Instant::now();
        for _ in 0..BATCH_RUNS {
            std::hint::black_box(engine.find_matching());
        }
        let batch = start.elapsed();
        best = Some(best.map_or(batch, |fastest| fastest.min(batch)));
    }

    best.unwrap_or_default() / BATCH_RUNS
}

// ============================================================================
// Unit Tests
// ============================================================================
