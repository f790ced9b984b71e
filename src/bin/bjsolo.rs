//! Terminal blackjack against the dealer.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::{
    Decision, Game, GameOptions, PlayerInput, RoundOutcome, RoundResult, TableView, Wager, Wallet,
};
use clap::Parser;
use tracing::{Level, error, info};

/// Play blackjack against a dealer from the terminal.
#[derive(Parser, Debug)]
#[command(name = "bjsolo", version, about)]
struct Args {
    /// Opening deposit; prompted for when omitted.
    #[arg(long)]
    deposit: Option<usize>,

    /// Shuffle seed; derived from the clock when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Total at which the dealer stops drawing.
    #[arg(long, default_value_t = 17)]
    dealer_stands_on: u8,

    /// Keep previous output on screen instead of clearing between phases.
    #[arg(long)]
    no_clear: bool,

    /// Maximum level of log events written to stderr.
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(args.log_level)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = GameOptions::default().with_dealer_stands_on(args.dealer_stands_on);
    info!(seed, dealer_stands_on = options.dealer_stands_on, "starting game");

    let mut terminal = Terminal::new(io::stdin().lock(), !args.no_clear);

    println!("\nWelcome to BlackJack!\n");

    let Some(opening) = args
        .deposit
        .filter(|&amount| amount >= 1)
        .or_else(|| terminal.deposit_amount())
    else {
        return ExitCode::SUCCESS;
    };
    let mut wallet = match Wallet::with_deposit(opening) {
        Ok(wallet) => wallet,
        Err(err) => {
            error!(%err, "opening deposit rejected");
            return ExitCode::FAILURE;
        }
    };

    let mut game = Game::new(options, seed);
    match game.play_session(&mut wallet, &mut terminal) {
        Ok(summary) => {
            println!(
                "You leave the table with {} chips after {} round(s) (net {:+}).",
                summary.balance,
                summary.rounds,
                summary.net()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "session aborted");
            eprintln!("Game aborted: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Prompts on stdout and reads answers from `input`.
struct Terminal<R> {
    input: R,
    clear: bool,
    closed: bool,
}

impl<R: BufRead> Terminal<R> {
    const fn new(input: R, clear: bool) -> Self {
        Self {
            input,
            clear,
            closed: false,
        }
    }

    fn clear_screen(&self) {
        if self.clear {
            print!("\u{1b}[2J\u{1b}[H");
        }
    }

    /// Prompts until `parse` accepts the input. Returns `None` once input has
    /// ended; every later prompt is skipped.
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, &'static str>,
    ) -> Option<T> {
        while !self.closed {
            let Some(line) = prompt_line(&mut self.input, prompt) else {
                self.closed = true;
                println!("\nGoodbye.");
                break;
            };
            match parse(&line) {
                Ok(value) => return Some(value),
                Err(message) => println!("{message}"),
            }
        }
        None
    }
}

impl<R: BufRead> PlayerInput for Terminal<R> {
    fn wager(&mut self, balance: usize) -> Wager {
        let Some(wager) = self.ask(
            &format!("Enter the amount to bet. (Balance: {balance}) (-1 to deposit more chips) "),
            |input| parse_wager(input, balance),
        ) else {
            return Wager::Leave;
        };
        if let Wager::Stake(bet) = wager {
            println!("You've bet {bet}.\n");
            self.clear_screen();
        }
        wager
    }

    fn deposit_amount(&mut self) -> Option<usize> {
        let amount = self.ask("Enter the amount of chips to deposit. ", parse_deposit)?;
        println!("You have successfully added {amount} to your wallet.\n");
        Some(amount)
    }

    fn hit_or_stay(&mut self, table: &TableView) -> Decision {
        self.clear_screen();
        print_table(table);
        self.ask("Enter \"h\" to hit, \"s\" to stay: ", parse_decision)
            .unwrap_or(Decision::Stay)
    }

    fn play_again(&mut self) -> bool {
        let again = self
            .ask("Do you want to play again? (Y/N) ", parse_yes_no)
            .unwrap_or(false);
        if again {
            self.clear_screen();
        }
        again
    }

    fn round_finished(&mut self, result: &RoundResult) {
        if result.outcome != RoundOutcome::PlayerBust {
            self.clear_screen();
        }
        println!("Dealer: {}", result.dealer);
        println!("Player: {}", result.player);
        println!("Bet: {}\n", result.bet);
        println!("{}", outcome_message(result));
    }
}

fn print_table(table: &TableView) {
    println!("Dealer: {}", table.dealer);
    println!("Player: {}", table.player);
    println!("Bet: {}\n", table.bet);
}

fn outcome_message(result: &RoundResult) -> String {
    let (bet, balance) = (result.bet, result.balance);
    match result.outcome {
        RoundOutcome::PlayerBust => format!(
            "You've busted, you lost {bet} so your current balance is {balance}"
        ),
        RoundOutcome::PlayerWin if result.tie => format!(
            "It's a tie, which goes to you! You receive {bet}, so your current balance is {balance}"
        ),
        RoundOutcome::PlayerWin => format!(
            "Congratulations, you won the game! You receive {bet}, so your current balance is {balance}"
        ),
        RoundOutcome::DealerWin => format!(
            "You've lost the game, you lose {bet}, so your current balance is {balance}"
        ),
    }
}

fn prompt_line(reader: &mut impl BufRead, prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn parse_wager(input: &str, balance: usize) -> Result<Wager, &'static str> {
    const RETRY: &str = "You may not have enough balance or you tried to bet less than 1.";

    let amount: i64 = input
        .parse()
        .map_err(|_| "There was an error, please try again.")?;
    if amount == -1 {
        return Ok(Wager::TopUp);
    }
    let amount = usize::try_from(amount).map_err(|_| RETRY)?;
    if amount == 0 || amount > balance {
        return Err(RETRY);
    }
    Ok(Wager::Stake(amount))
}

fn parse_deposit(input: &str) -> Result<usize, &'static str> {
    let amount: i64 = input
        .parse()
        .map_err(|_| "There was an error, please try again.")?;
    match usize::try_from(amount) {
        Ok(amount) if amount >= 1 => Ok(amount),
        _ => Err("You cannot add less than 1 chip."),
    }
}

fn parse_decision(input: &str) -> Result<Decision, &'static str> {
    match input {
        "h" | "hit" => Ok(Decision::Hit),
        "s" | "stay" | "stand" => Ok(Decision::Stay),
        _ => Err("There was an error, please try again."),
    }
}

fn parse_yes_no(input: &str) -> Result<bool, &'static str> {
    match input {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err("There was an error, please try again."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::parse_from([
            "bjsolo",
            "--deposit",
            "250",
            "--seed",
            "7",
            "--dealer-stands-on",
            "18",
            "--no-clear",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.deposit, Some(250));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.dealer_stands_on, 18);
        assert!(args.no_clear);
        assert_eq!(args.log_level, Level::DEBUG);
    }

    #[test]
    fn defaults_match_standard_table() {
        let args = Args::parse_from(["bjsolo"]);
        assert_eq!(args.deposit, None);
        assert_eq!(args.dealer_stands_on, 17);
        assert!(!args.no_clear);
        assert_eq!(args.log_level, Level::WARN);
    }

    #[test]
    fn wager_input_is_validated_against_balance() {
        assert_eq!(parse_wager("20", 100), Ok(Wager::Stake(20)));
        assert_eq!(parse_wager("100", 100), Ok(Wager::Stake(100)));
        assert_eq!(parse_wager("-1", 100), Ok(Wager::TopUp));
        assert!(parse_wager("0", 100).is_err());
        assert!(parse_wager("101", 100).is_err());
        assert!(parse_wager("-5", 100).is_err());
        assert!(parse_wager("ten", 100).is_err());
        assert!(parse_wager("1", 0).is_err());
    }

    #[test]
    fn deposit_input_requires_a_chip() {
        assert_eq!(parse_deposit("5"), Ok(5));
        assert!(parse_deposit("0").is_err());
        assert!(parse_deposit("-3").is_err());
        assert!(parse_deposit("").is_err());
    }

    #[test]
    fn closed_input_leaves_the_table() {
        let mut terminal = Terminal::new(&b""[..], false);
        assert_eq!(terminal.deposit_amount(), None);
        assert!(terminal.closed);
        assert_eq!(terminal.wager(100), Wager::Leave);
        assert!(!terminal.play_again());
    }

    #[test]
    fn session_ends_cleanly_when_input_runs_out() {
        let mut terminal = Terminal::new(&b"abc\n10\ns\n"[..], false);
        let mut game = Game::new(GameOptions::default(), 3);
        let mut wallet = Wallet::with_deposit(50).unwrap();

        let summary = game.play_session(&mut wallet, &mut terminal).unwrap();

        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.balance, wallet.balance());
        assert!(terminal.closed);
    }

    #[test]
    fn cancelled_top_up_asks_for_the_bet_again() {
        let mut terminal = Terminal::new(&b"-1\n"[..], false);
        let mut game = Game::new(GameOptions::default(), 3);
        let mut wallet = Wallet::with_deposit(50).unwrap();

        assert_eq!(game.play_round(&mut wallet, &mut terminal), Ok(None));
        assert_eq!(wallet.balance(), 50);
    }

    #[test]
    fn choices_accept_short_and_long_forms() {
        assert_eq!(parse_decision("h"), Ok(Decision::Hit));
        assert_eq!(parse_decision("stay"), Ok(Decision::Stay));
        assert!(parse_decision("x").is_err());
        assert_eq!(parse_yes_no("y"), Ok(true));
        assert_eq!(parse_yes_no("no"), Ok(false));
        assert!(parse_yes_no("maybe").is_err());
    }
}
