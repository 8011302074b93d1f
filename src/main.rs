use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};

use crypto_manager::{Bellaso, Caesar, Decryptor, Encryptor, WrapMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Caesar,
    Bellaso,
}

/// Encrypt or decrypt text restricted to the characters ' ' through '_'.
#[derive(Debug, Parser)]
#[command(name = "crypto-manager", version)]
struct Args {
    /// Cipher to apply
    #[arg(long, value_enum)]
    cipher: Algorithm,

    /// Integer shift for the Caesar cipher
    #[arg(
        long,
        allow_hyphen_values = true,
        required_if_eq("cipher", "caesar"),
        conflicts_with = "key"
    )]
    shift: Option<i32>,

    /// Key string for the Bellaso cipher
    #[arg(long, required_if_eq("cipher", "bellaso"))]
    key: Option<String>,

    /// Decrypt instead of encrypt
    #[arg(long)]
    decrypt: bool,

    /// Wrap shifts symmetrically instead of the legacy way
    #[arg(long)]
    symmetric: bool,

    /// Texts to process; stdin lines are read when none are given
    text: Vec<String>,
}

fn choose_algorithm(args: &Args) -> Option<(Box<dyn Encryptor>, Box<dyn Decryptor>)> {
    let mode = if args.symmetric {
        WrapMode::Symmetric
    } else {
        WrapMode::Legacy
    };

    match args.cipher {
        Algorithm::Caesar => {
            let cipher = Caesar::new(args.shift?).with_mode(mode);
            Some((Box::new(cipher), Box::new(cipher)))
        }
        Algorithm::Bellaso => {
            let cipher = Bellaso::new(args.key.clone()?).with_mode(mode);
            Some((Box::new(cipher.clone()), Box::new(cipher)))
        }
    }
}

fn process(args: &Args, encryptor: &dyn Encryptor, decryptor: &dyn Decryptor, text: &str) -> bool {
    let result = if args.decrypt {
        decryptor.decrypt(text)
    } else {
        encryptor.encrypt(text)
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            true
        }
        Err(e) => {
            eprintln!("error: {}", e);
            false
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // clap enforces the key flag for each cipher
    let Some((encryptor, decryptor)) = choose_algorithm(&args) else {
        error!("no key given for {:?} cipher", args.cipher);
        return ExitCode::from(2);
    };

    info!(
        "{} with {:?} cipher",
        if args.decrypt { "decrypting" } else { "encrypting" },
        args.cipher
    );

    let mut ok = true;

    if args.text.is_empty() {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => ok &= process(&args, encryptor.as_ref(), decryptor.as_ref(), &line),
                Err(e) => {
                    error!("failed to read stdin: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    } else {
        for text in &args.text {
            ok &= process(&args, encryptor.as_ref(), decryptor.as_ref(), text);
        }
    }

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
