//! # Day 10: Factory
//!
//! Each machine has a row of indicator lights, a set of buttons and a joltage counter per light.
//! A button toggles some lights when the machine is configuring its lights, and increments the
//! matching counters when it is configuring joltages.
//!
//! For the lights only the parity of the number of presses of each button matters, so the first
//! part is a search over subsets of buttons. The second part is an integer program: one variable
//! per button, one equality per counter.
use std::str::FromStr;
use std::sync::LazyLock;

use itertools::Itertools;
use log::debug;
use regex::Regex;

use crate::algorithm::SolveError;
use crate::algorithm::branch_and_bound::SolveInteger;
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::puzzle::{Day, Example, Part, PuzzleError};

static MACHINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([.#]*)\]((?:\s+\([0-9,]*\))*)\s+\{([0-9,]*)\}$").expect("valid machine pattern")
});
static BUTTON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([0-9,]*)\)").expect("valid button pattern")
});

const EXAMPLE: &str = "\
[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}";

const PART_ONE_EXAMPLES: &[Example] = &[Example { input: EXAMPLE, answer: "7" }];
const PART_TWO_EXAMPLES: &[Example] = &[Example { input: EXAMPLE, answer: "33" }];

/// The factory floor full of machines.
#[derive(Copy, Clone, Debug, Default)]
pub struct Factory;

impl Day for Factory {
    fn number(&self) -> u8 {
        10
    }

    fn part_one(&self, input: &str) -> Result<String, PuzzleError> {
        let total = parse_machines(input)?
            .iter()
            .map(Machine::fewest_presses_for_lights)
            .sum::<Result<usize, _>>()?;

        Ok(total.to_string())
    }

    fn part_two(&self, input: &str) -> Result<String, PuzzleError> {
        let total = parse_machines(input)?
            .iter()
            .map(Machine::fewest_presses_for_joltages)
            .sum::<Result<i64, _>>()?;

        Ok(total.to_string())
    }

    fn examples(&self, part: Part) -> &'static [Example] {
        match part {
            Part::One => PART_ONE_EXAMPLES,
            Part::Two => PART_TWO_EXAMPLES,
        }
    }
}

/// Parse one machine per non-empty line.
fn parse_machines(input: &str) -> Result<Vec<Machine>, PuzzleError> {
    input.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| line.trim().parse().map_err(|error: PuzzleError| error.at_line(index + 1)))
        .collect()
}

/// A single machine, as described by one line of input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Machine {
    /// Desired state of the lights, least significant bit first.
    target: u64,
    nr_lights: usize,
    /// For each button, the lights (and counters) it is wired to.
    buttons: Vec<Vec<usize>>,
    joltages: Vec<u32>,
}

impl Machine {
    /// Number of indicator lights, equal to the number of joltage counters.
    pub fn nr_lights(&self) -> usize {
        self.nr_lights
    }

    /// The lights each button is wired to.
    pub fn buttons(&self) -> &[Vec<usize>] {
        &self.buttons
    }

    /// Required value of each joltage counter.
    pub fn joltages(&self) -> &[u32] {
        &self.joltages
    }

    /// Fewest button presses that turn on exactly the lights of the diagram, starting from all
    /// lights off.
    ///
    /// Pressing a button twice undoes the first press, so an optimal sequence presses every
    /// button at most once. Subsets are tried in order of increasing size.
    pub fn fewest_presses_for_lights(&self) -> Result<usize, PuzzleError> {
        let masks = self.buttons.iter()
            .map(|button| button.iter().fold(0_u64, |mask, &light| mask ^ (1 << light)))
            .collect::<Vec<_>>();

        (0..=masks.len())
            .find(|&size| {
                masks.iter()
                    .combinations(size)
                    .any(|pressed| pressed.into_iter().fold(0, |lights, mask| lights ^ mask) == self.target)
            })
            .ok_or(PuzzleError::Unsolvable)
    }

    /// The integer program for configuring the joltage counters.
    ///
    /// Minimizes the total number of presses, subject to every counter reaching its required value
    /// exactly.
    pub fn joltage_program(&self) -> LinearProgram<f64> {
        let mut program = LinearProgram::new(Objective::Minimize, vec![1f64; self.buttons.len()]);
        for (counter, &joltage) in self.joltages.iter().enumerate() {
            let row = self.buttons.iter()
                .map(|button| button.iter().filter(|&&wired| wired == counter).count() as f64)
                .chain(std::iter::once(f64::from(joltage)))
                .collect();
            program = program.with_constraint(ConstraintType::Equal, row);
        }

        program
    }

    /// Fewest button presses that bring every joltage counter to its required value, starting
    /// from zero.
    pub fn fewest_presses_for_joltages(&self) -> Result<i64, PuzzleError> {
        let solution = self.joltage_program()
            .solve_integer()
            .map_err(|error| match error {
                SolveError::Infeasible => PuzzleError::Unsolvable,
                other => PuzzleError::Solve(other),
            })?;
        debug!("Presses {:?} for joltages {:?}", solution.assignments(), self.joltages);

        Ok(solution.assignments().iter().sum())
    }
}

impl FromStr for Machine {
    type Err = PuzzleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let captures = MACHINE.captures(line)
            .ok_or_else(|| PuzzleError::Malformed(format!("not a machine: {:?}", line)))?;

        let diagram = &captures[1];
        let nr_lights = diagram.len();
        if nr_lights > 64 {
            return Err(PuzzleError::Malformed(format!("{} lights, at most 64 are supported", nr_lights)));
        }
        let target = diagram.chars()
            .enumerate()
            .filter(|&(_, light)| light == '#')
            .fold(0_u64, |target, (index, _)| target | (1 << index));

        let buttons = BUTTON.captures_iter(&captures[2])
            .map(|button| parse_list::<usize>(&button[1]))
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(&light) = buttons.iter().flatten().find(|&&light| light >= nr_lights) {
            return Err(PuzzleError::Malformed(format!(
                "a button is wired to light {}, but there are only {} lights", light, nr_lights,
            )));
        }

        let joltages = parse_list::<u32>(&captures[3])?;
        if joltages.len() != nr_lights {
            return Err(PuzzleError::Malformed(format!(
                "{} joltage requirements for {} lights", joltages.len(), nr_lights,
            )));
        }

        Ok(Self { target, nr_lights, buttons, joltages })
    }
}

/// Parse a comma separated list of numbers, which may be empty.
fn parse_list<T: FromStr<Err = std::num::ParseIntError>>(list: &str) -> Result<Vec<T>, PuzzleError> {
    if list.is_empty() {
        return Ok(Vec::new());
    }

    list.split(',')
        .map(|number| number.parse().map_err(PuzzleError::from))
        .collect()
}

#[cfg(test)]
mod test {
    use crate::puzzle::{Day, Part, PuzzleError};
    use crate::puzzle::day10::{EXAMPLE, Factory, Machine};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn parse() {
        let machine: Machine = "[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}".parse().unwrap();
        assert_eq!(machine.nr_lights(), 4);
        assert_eq!(machine.target, 0b0110);
        assert_eq!(machine.buttons(), &[vec![3], vec![1, 3], vec![2], vec![2, 3], vec![0, 2], vec![0, 1]]);
        assert_eq!(machine.joltages(), &[3, 5, 4, 7]);
    }

    #[test]
    fn malformed() {
        assert!(matches!("(1) {1}".parse::<Machine>(), Err(PuzzleError::Malformed(_))));
        assert!(matches!("[.#] (2) {1,1}".parse::<Machine>(), Err(PuzzleError::Malformed(_))));
        assert!(matches!("[.#] (1) {1}".parse::<Machine>(), Err(PuzzleError::Malformed(_))));
        assert!(matches!("[.#] (1,,0) {1,1}".parse::<Machine>(), Err(PuzzleError::Number(_))));

        let result = Factory.part_one("[.#] (1) {1,1}\n[#] (x) {1}");
        assert!(matches!(result, Err(PuzzleError::AtLine { line: 2, .. })));
    }

    #[test]
    fn lights() {
        let presses = EXAMPLE.lines()
            .map(|line| line.parse::<Machine>().unwrap().fewest_presses_for_lights().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(presses, vec![2, 3, 2]);

        let machine: Machine = "[...] (0,1) {1,1,0}".parse().unwrap();
        assert_eq!(machine.fewest_presses_for_lights(), Ok(0));
        let machine: Machine = "[#.] (1) {1,1}".parse().unwrap();
        assert_eq!(machine.fewest_presses_for_lights(), Err(PuzzleError::Unsolvable));
    }

    #[test]
    fn joltages() {
        init();

        let presses = EXAMPLE.lines()
            .map(|line| line.parse::<Machine>().unwrap().fewest_presses_for_joltages().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(presses, vec![10, 12, 11]);

        // The same button twice
        let machine: Machine = "[.#] (0,1) (0,1) (1) {2,3}".parse().unwrap();
        assert_eq!(machine.fewest_presses_for_joltages(), Ok(3));
        let machine: Machine = "[.#] (0,1) {2,3}".parse().unwrap();
        assert_eq!(machine.fewest_presses_for_joltages(), Err(PuzzleError::Unsolvable));
    }

    #[test]
    fn examples() {
        init();

        for part in Part::ALL {
            for example in Factory.examples(part) {
                assert_eq!(Factory.solve(part, example.input).unwrap(), example.answer, "{}", part);
            }
        }
    }
}
