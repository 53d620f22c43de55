use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use rsa_demo::rsa::config::{DEFAULT_MAX_PRIME_ATTEMPTS, DEFAULT_MILLER_RABIN_ROUNDS};
use rsa_demo::rsa::{
    decrypt_str, encrypt_str, generate_keypair_with, rsa_pipeline, GenerationConfig,
    RsaPrivateKey, RsaPublicKey,
};

/// CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(name = "rsa-demo", version, about = "Textbook RSA key generation, encryption and decryption")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a keypair and print it as hex
    Keygen(KeygenArgs),
    /// Encrypt a decimal message integer under (e, n)
    Encrypt {
        #[arg(short, long)]
        e: String,
        #[arg(short, long)]
        n: String,
        /// Message integer, decimal
        #[arg(short, long)]
        message: String,
    },
    /// Decrypt a hex ciphertext under (d, n)
    Decrypt {
        #[arg(short, long)]
        d: String,
        #[arg(short, long)]
        n: String,
        /// Ciphertext, hex
        #[arg(short, long)]
        ciphertext: String,
    },
    /// Generate a keypair and run a text message through the full pipeline
    Demo {
        #[command(flatten)]
        keygen: KeygenArgs,
        #[arg(short, long, default_value = "Hello, World!")]
        message: String,
    },
}

#[derive(Args, Debug)]
struct KeygenArgs {
    /// Modulus size in bits
    #[arg(short = 'b', long = "bits", default_value_t = 1024)]
    bits: u64,

    /// Miller-Rabin rounds per candidate
    #[arg(
        long = "rounds",
        default_value_t = DEFAULT_MILLER_RABIN_ROUNDS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    rounds: u32,

    /// Give up on a prime search after this many candidates (0 = never)
    #[arg(long = "max-attempts", default_value_t = DEFAULT_MAX_PRIME_ATTEMPTS)]
    max_attempts: u64,
}

impl KeygenArgs {
    fn config(&self) -> GenerationConfig {
        let cap = if self.max_attempts == 0 {
            None
        } else {
            Some(self.max_attempts)
        };
        GenerationConfig::default()
            .with_rounds(self.rounds)
            .with_max_prime_attempts(cap)
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Keygen(args) => {
            if args.bits < 512 {
                eprintln!("Warning: {}-bit keys are for experiments only", args.bits);
            }
            let keypair = generate_keypair_with(args.bits, &args.config())
                .with_context(|| format!("generating a {}-bit keypair", args.bits))?;
            let hex = keypair.to_hex();
            println!("public.e={}", hex.public.0);
            println!("public.n={}", hex.public.1);
            println!("private.d={}", hex.private.0);
            println!("private.n={}", hex.private.1);
        }
        Command::Encrypt { e, n, message } => {
            let key = RsaPublicKey::from_hex(&e, &n).context("parsing public key")?;
            let ciphertext = encrypt_str(&message, &key).context("encrypting message")?;
            println!("{}", ciphertext);
        }
        Command::Decrypt { d, n, ciphertext } => {
            let key = RsaPrivateKey::from_hex(&d, &n).context("parsing private key")?;
            let plaintext = decrypt_str(&ciphertext, &key).context("decrypting ciphertext")?;
            println!("{}", plaintext);
        }
        Command::Demo { keygen, message } => {
            let keypair = generate_keypair_with(keygen.bits, &keygen.config())
                .with_context(|| format!("generating a {}-bit keypair", keygen.bits))?;
            println!("Public Key: {}", keypair.public_key);
            println!("Private Key: {}", keypair.private_key);

            let (text, outputs) = rsa_pipeline(&message, &keypair).context("running RSA pipeline")?;
            println!("Original Message: {}", message);
            println!("Message Bytes: {}", hex::encode(message.as_bytes()));
            println!("Message As Number: {}", outputs.message_as_number);
            println!("Encrypted Message: {}", outputs.encrypted_message);
            println!("Decrypted Message (as number): {}", outputs.decrypted_message);
            println!("Final Message: {}", text);
        }
    }
    Ok(())
}
