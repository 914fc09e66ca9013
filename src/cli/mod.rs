//! Terminal menus. Everything here talks to the shop through `ShopClient`
//! and owns all prompting, re-prompting and rendering.

mod args;
mod input;
mod menu;
mod render;

pub use args::*;
pub use input::*;
pub use menu::*;
pub use render::*;

use anyhow::Result;
use console::{style, Emoji, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use tracing::{debug, info};

use crate::clients::ShopClient;
use crate::config::Config;
use crate::error::ShopError;

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static CROSS: Emoji<'_, '_> = Emoji("❌ ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️ ", "");

pub struct ShopCli {
    client: ShopClient,
    config: Config,
    term: Term,
}

impl ShopCli {
    pub fn new(client: ShopClient, config: Config) -> Self {
        Self {
            client,
            config,
            term: Term::stdout(),
        }
    }

    pub async fn run(&self) -> Result<()> {
        println!(
            "\n{}\n",
            style("Welcome To MERS Clothing Line Shopping System!").bold().cyan()
        );

        loop {
            let choice = prompt(select_menu).await?;
            debug!(?choice, "Menu selection");
            self.clear()?;

            match choice {
                MenuChoice::ViewProducts => self.view_products().await?,
                MenuChoice::ViewCart => self.view_cart().await?,
                MenuChoice::ViewAllOrders => self.view_all_orders().await?,
                MenuChoice::Exit => {
                    println!("Bye!\nThank you!");
                    info!("Shopper exited");
                    return Ok(());
                }
            }
        }
    }

    fn clear(&self) -> Result<()> {
        if self.config.clear_screen {
            self.term.clear_screen()?;
        }
        Ok(())
    }

    async fn view_products(&self) -> Result<()> {
        let products = self.client.list_products().await?;
        println!("{}", style("Available Products:").bold());
        println!("{}", format_product_table(&products));

        loop {
            let product_id = prompt(ask_product_id).await?;
            let quantity = prompt(ask_quantity).await?;

            match self.client.add_to_cart(product_id, quantity).await {
                Ok(line) => println!(
                    "{}Added {} x {} ({} in cart)",
                    CHECKMARK,
                    quantity,
                    style(&line.name).green(),
                    line.quantity
                ),
                Err(e) => report(e)?,
            }

            if !prompt(|| confirm("Do you want to add another product?")).await? {
                return Ok(());
            }
        }
    }

    async fn view_cart(&self) -> Result<()> {
        let cart = self.client.view_cart().await?;
        if cart.is_empty() {
            println!("{}Shopping Cart is empty.", INFO);
            return Ok(());
        }

        println!("{}", style("Shopping Cart:").bold());
        println!("{}", format_cart(&cart));

        match prompt(select_cart_action).await? {
            CartAction::Checkout => {
                if !prompt(|| confirm("Do you want to check out all the products?")).await? {
                    return Ok(());
                }
                match self.client.checkout().await {
                    Ok(order) => {
                        let recorded = self.client.get_order(order.id()).await?;
                        println!("{}Order placed!\n", CHECKMARK);
                        println!("{}", format_order(&recorded));
                    }
                    Err(e) => report(e)?,
                }
            }
            CartAction::Empty => {
                self.client.clear_cart().await?;
                println!("{}Shopping Cart emptied.", CHECKMARK);
            }
            CartAction::Back => {}
        }
        Ok(())
    }

    async fn view_all_orders(&self) -> Result<()> {
        let orders = self.client.list_orders().await?;
        if orders.is_empty() {
            println!("{}No orders have been placed.", INFO);
            return Ok(());
        }

        for order in &orders {
            println!("{}", format_order(order));
            println!("-------------------------------------------------");
        }
        Ok(())
    }
}

/// Prints a recoverable shop error. Losing the service is not recoverable
/// and is passed up.
fn report(error: ShopError) -> Result<()> {
    if let ShopError::ActorCommunicationError(_) = error {
        return Err(error.into());
    }
    println!("{}{}", CROSS, style(describe_error(&error)).red());
    Ok(())
}

/// Runs a blocking terminal prompt off the async worker threads.
async fn prompt<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

fn select_menu() -> Result<MenuChoice> {
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Menu")
        .items(&MenuChoice::ALL)
        .default(0)
        .interact()?;
    Ok(MenuChoice::ALL[index])
}

fn select_cart_action() -> Result<CartAction> {
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What would you like to do?")
        .items(&CartAction::ALL)
        .default(0)
        .interact()?;
    Ok(CartAction::ALL[index])
}

fn ask_product_id() -> Result<String> {
    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter the Product ID to add to cart")
        .validate_with(|input: &String| -> Result<(), String> {
            parse_product_id(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(parse_product_id(&raw)?)
}

fn ask_quantity() -> Result<u32> {
    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter the quantity")
        .validate_with(|input: &String| -> Result<(), String> {
            parse_quantity(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(parse_quantity(&raw)?)
}

fn confirm(question: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(question)
        .default(false)
        .interact()?)
}
