//! The menu loop: prompt, collect a request, forward it, print the outcome.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use ledgerbank_accounts::LedgerEntry;
use ledgerbank_bank::Bank;
use ledgerbank_core::{BankError, BankResult, TaxId};
use ledgerbank_parties::{BIRTH_DATE_FORMAT, NewCustomer};

use crate::menu::{MENU, MenuOption};
use crate::render;

/// Line-oriented prompt over any reader/writer pair.
struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Print `label` and read one line. `None` means end of input.
    fn ask(&mut self, label: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.output, "{text}")
    }
}

/// Outcome of one menu action.
enum Flow {
    Continue,
    Stop,
}

/// Run the interactive menu until `q` or end of input.
pub fn run<R: BufRead, W: Write>(bank: &mut Bank, input: R, output: W) -> anyhow::Result<()> {
    let mut console = Console { input, output };

    loop {
        let Some(choice) = console.ask(MENU)? else {
            break;
        };

        let flow = match choice.parse::<MenuOption>() {
            Ok(MenuOption::Quit) => break,
            Ok(option) => {
                tracing::debug!("menu option {}", option.code());
                dispatch(bank, &mut console, option)?
            }
            Err(_) => {
                console.say(&render::failure(
                    "Invalid operation, please select the desired operation again.",
                ))?;
                Flow::Continue
            }
        };

        if let Flow::Stop = flow {
            break;
        }
    }

    Ok(())
}

fn dispatch<R: BufRead, W: Write>(
    bank: &mut Bank,
    console: &mut Console<R, W>,
    option: MenuOption,
) -> std::io::Result<Flow> {
    match option {
        MenuOption::Deposit => transact(bank, console, "Enter the deposit amount: ", Bank::deposit),
        MenuOption::Withdraw => {
            transact(bank, console, "Enter the withdrawal amount: ", Bank::withdraw)
        }
        MenuOption::Statement => show_statement(bank, console),
        MenuOption::NewAccount => open_account(bank, console),
        MenuOption::ListAccounts => list_accounts(bank, console),
        MenuOption::NewCustomer => new_customer(bank, console),
        MenuOption::Quit => Ok(Flow::Stop),
    }
}

/// Ask for a tax id. A blank one is reported and the action ends.
fn ask_tax_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
) -> std::io::Result<Result<TaxId, Flow>> {
    let Some(raw) = console.ask(label)? else {
        return Ok(Err(Flow::Stop));
    };
    match raw.parse::<TaxId>() {
        Ok(tax_id) => Ok(Ok(tax_id)),
        Err(err) => {
            console.say(&render::error(&err))?;
            Ok(Err(Flow::Continue))
        }
    }
}

fn transact<R: BufRead, W: Write>(
    bank: &mut Bank,
    console: &mut Console<R, W>,
    amount_label: &str,
    operation: fn(&mut Bank, &TaxId, Decimal) -> BankResult<LedgerEntry>,
) -> std::io::Result<Flow> {
    let tax_id = match ask_tax_id(console, "Enter the customer's tax id: ")? {
        Ok(tax_id) => tax_id,
        Err(flow) => return Ok(flow),
    };

    if let Err(err) = bank.find_customer_by_tax_id(&tax_id) {
        console.say(&render::error(&err))?;
        return Ok(Flow::Continue);
    }

    let Some(raw) = console.ask(amount_label)? else {
        return Ok(Flow::Stop);
    };
    let amount = match parse_amount(&raw) {
        Some(amount) => amount,
        None => {
            console.say(&render::failure("Operation failed! The value entered is not a number."))?;
            return Ok(Flow::Continue);
        }
    };

    match operation(bank, &tax_id, amount) {
        Ok(entry) => console.say(&render::success(&format!(
            "{} completed successfully!",
            entry.kind()
        )))?,
        Err(err) => console.say(&render::error(&err))?,
    }
    Ok(Flow::Continue)
}

/// Plain decimals first, then scientific notation such as `1e3`.
fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    raw.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(raw).ok())
}

fn show_statement<R: BufRead, W: Write>(
    bank: &Bank,
    console: &mut Console<R, W>,
) -> std::io::Result<Flow> {
    let tax_id = match ask_tax_id(console, "Enter the customer's tax id: ")? {
        Ok(tax_id) => tax_id,
        Err(flow) => return Ok(flow),
    };

    match bank.statement(&tax_id) {
        Ok(statement) => console.say(&render::statement(&statement))?,
        Err(err) => console.say(&render::error(&err))?,
    }
    Ok(Flow::Continue)
}

fn open_account<R: BufRead, W: Write>(
    bank: &mut Bank,
    console: &mut Console<R, W>,
) -> std::io::Result<Flow> {
    let tax_id = match ask_tax_id(console, "Enter the customer's tax id: ")? {
        Ok(tax_id) => tax_id,
        Err(flow) => return Ok(flow),
    };

    match bank.open_account(&tax_id) {
        Ok(account) => {
            let message = format!("Account {} created successfully!", account.number());
            console.say(&render::success(&message))?;
        }
        Err(BankError::CustomerNotFound(_)) => console.say(&render::failure(
            "Customer not found, account creation flow ended!",
        ))?,
        Err(err) => console.say(&render::error(&err))?,
    }
    Ok(Flow::Continue)
}

fn list_accounts<R: BufRead, W: Write>(
    bank: &Bank,
    console: &mut Console<R, W>,
) -> std::io::Result<Flow> {
    let summaries = match bank.list_accounts() {
        Ok(summaries) => summaries,
        Err(err) => {
            console.say(&render::error(&err))?;
            return Ok(Flow::Continue);
        }
    };

    let separator = "=".repeat(100);
    for summary in summaries {
        console.say(&separator)?;
        console.say(&render::account_summary(&summary))?;
    }
    Ok(Flow::Continue)
}

fn new_customer<R: BufRead, W: Write>(
    bank: &mut Bank,
    console: &mut Console<R, W>,
) -> std::io::Result<Flow> {
    let tax_id = match ask_tax_id(console, "Enter the tax id (numbers only): ")? {
        Ok(tax_id) => tax_id,
        Err(flow) => return Ok(flow),
    };

    // Checked up front so the remaining questions are skipped.
    if bank.find_customer_by_tax_id(&tax_id).is_ok() {
        console.say(&render::error(&BankError::DuplicateTaxId(tax_id)))?;
        return Ok(Flow::Continue);
    }

    let Some(name) = console.ask("Enter the full name: ")? else {
        return Ok(Flow::Stop);
    };
    let Some(raw_birth_date) = console.ask("Enter the birth date (dd-mm-yyyy): ")? else {
        return Ok(Flow::Stop);
    };
    let Some(address) =
        console.ask("Enter the address (street, number - district - city/state): ")?
    else {
        return Ok(Flow::Stop);
    };

    let birth_date = match NaiveDate::parse_from_str(raw_birth_date.trim(), BIRTH_DATE_FORMAT) {
        Ok(date) => date,
        Err(_) => {
            console.say(&render::failure(
                "Operation failed! The birth date must be in dd-mm-yyyy format.",
            ))?;
            return Ok(Flow::Continue);
        }
    };

    let request = NewCustomer {
        tax_id,
        name,
        birth_date,
        address,
    };
    match bank.create_customer(request) {
        Ok(_) => console.say(&render::success("Customer created successfully!"))?,
        Err(err) => console.say(&render::error(&err))?,
    }
    Ok(Flow::Continue)
}
