use std::io;
use std::io::Write;

use clap::{ArgAction, Parser};

use linalg_calc::error::CalcError;
use linalg_calc::input::parse::parse;
use linalg_calc::input::validate::validate;
use linalg_calc::matrix::determinant::SquareMatrix;
use linalg_calc::matrix::matrix::Matrix;
use linalg_calc::matrix::rref::rref;

#[derive(Parser, Debug)]
#[command(
    name = "linalg_calc",
    about = "Command-line linear algebra calculator",
    disable_help_flag = true
)]
pub struct Args {
    /// Show input format instructions and exit
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// Print the matrix and its determinant
    #[arg(short = 'd', conflicts_with = "rref")]
    pub determinant: bool,

    /// Print the matrix and its row-reduced echelon form
    #[arg(long)]
    pub rref: bool,

    /// Matrix text: entries separated by spaces, rows by commas
    #[arg(allow_hyphen_values = true)]
    pub matrix: Option<String>,

    /// Second matrix text (validated, but unused by the current operations)
    #[arg(allow_hyphen_values = true)]
    pub second: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Determinant,
    Rref,
}

impl Operation {
    /// Number of matrix operands the operation consumes.
    pub fn arity(&self) -> usize {
        match self {
            Operation::Determinant | Operation::Rref => 1,
        }
    }
}

pub fn run(args: Args) -> i32 {
    println!();

    if args.help {
        return display_instructions();
    }

    let Some(first) = args.matrix else {
        println!("For help, run the program with -h.\n");
        return 0;
    };

    let operation = if args.determinant {
        Operation::Determinant
    } else if args.rref {
        Operation::Rref
    } else {
        eprintln!("No operation was chosen; pass -d or --rref.\n");
        return 1;
    };

    let matrix_a = match acquire_matrix(first) {
        Ok(matrix) => matrix,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };

    // a second operand goes through the same pipeline as the first, even
    // though neither implemented operation consumes it
    if let Some(second) = args.second {
        if operation.arity() < 2 {
            println!("Note: the second matrix is not used by this operation.\n");
        }
        if let Err(err) = acquire_matrix(second) {
            eprintln!("{err}");
            return 1;
        }
    }

    execute(operation, &matrix_a);
    0
}

fn execute(operation: Operation, matrix: &Matrix) {
    print!("{matrix}");
    println!();

    match operation {
        Operation::Determinant => match SquareMatrix::try_from(matrix.clone()) {
            Ok(square) => println!("Determinant: {}\n", square.determinant()),
            Err(err) => println!("{err}! Determinant cannot be calculated.\n"),
        },
        Operation::Rref => match rref(matrix) {
            Ok(reduced) => {
                println!("RREF:\n");
                print!("{reduced}");
                println!();
            }
            Err(err) => println!("{err}.\n"),
        },
    }
}

/// Validate matrix text, re-prompting on rejection, then parse it.
fn acquire_matrix(initial: String) -> Result<Matrix, CalcError> {
    let mut attempt = initial;

    let accepted = loop {
        match validate(&attempt) {
            Ok(text) => break text,
            Err(reason) => {
                println!("{reason}! Please try again.\n");
                attempt = prompt_for_matrix();
            }
        }
    };

    println!("Input has been cleaned up to be: {accepted}\n");
    parse(&accepted)
}

fn prompt_for_matrix() -> String {
    print!("Enter your matrix: ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        // an unreadable or closed input stream cannot be recovered from
        Ok(0) | Err(_) => {
            eprintln!("\nInput stream was closed, exiting.");
            std::process::exit(1);
        }
        Ok(_) => line.trim_end_matches(['\r', '\n']).to_string(),
    }
}

fn display_instructions() -> i32 {
    println!("\t\tWELCOME TO THE LINEAR ALGEBRA CALCULATOR!\n");

    println!("The program takes matrix input in the following format:");
    println!("\t1. Entries are entered by row, each separated by a space.");
    println!("\t2. Each row is separated by a comma.\n");
    println!("The following example input...\n");
    println!("1 2 3, 4 5 6, 7 8 9,\t*the comma ending the last row is optional\n");
    println!("... will yield this matrix:\n");
    print!(
        "{}",
        Matrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
    );
    println!();
    println!("Rows with fewer entries than the widest row are padded with 0's.\n");

    print!("Enter 'y' to start the program: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_ok() && answer.trim() == "y" {
        println!("\nRun again with -d or --rref followed by your matrix.\n");
    }

    0
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
