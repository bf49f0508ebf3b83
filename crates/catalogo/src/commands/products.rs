//! Product command handlers.

use tabled::Tabled;

use catalogo_core::{Catalog, Product, ProductForm, ProductState};

use crate::cli::{GlobalOpts, OutputFormat, ProductsArgs, ProductsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "SKU")]
    sku: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Active")]
    active: String,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            sku: p.sku.clone(),
            name: p.name.clone(),
            price: format!("{:.2}", p.price),
            active: if p.active { "yes" } else { "no" }.into(),
        }
    }
}

fn detail(p: &Product) -> String {
    [
        format!("ID:          {}", p.id),
        format!("SKU:         {}", p.sku),
        format!("Name:        {}", p.name),
        format!("Description: {}", p.description),
        format!("Price:       {:.2}", p.price),
        format!("Active:      {}", p.active),
    ]
    .join("\n")
}

fn page_footer(state: &ProductState) -> String {
    let next = if state.has_next_page() {
        format!(", more with --page {}", state.current_page + 1)
    } else {
        String::new()
    };
    format!(
        "Page {}, {} product(s) in total{}{next}",
        state.current_page,
        state.product_list.total_count,
        if state.filter_active { " (active only)" } else { "" },
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    catalog: &Catalog,
    args: ProductsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProductsCommand::List {
            active,
            page,
            per_page,
        } => {
            let active = active.unwrap_or(catalog.config().active_only);
            let per_page = per_page.unwrap_or_else(|| catalog.items_per_page());

            let rx = catalog.notifications();
            util::finish(catalog.fetch_list(active, page, per_page), rx, global).await?;

            let state = catalog.state();
            let out = output::render_list(
                global.output_format(),
                &state.product_list.list,
                |p| ProductRow::from(p),
                |p| p.id.clone(),
            );
            output::print_output(&out, global.quiet);
            if matches!(global.output_format(), OutputFormat::Table) && !global.quiet {
                eprintln!("{}", page_footer(&state));
            }
            Ok(())
        }

        ProductsCommand::Get { id } => {
            let rx = catalog.notifications();
            util::finish(catalog.search(&id), rx, global).await?;
            print_current(catalog, global, &id)
        }

        ProductsCommand::Scan { code } => {
            let rx = catalog.notifications();
            util::finish(catalog.search_barcode(&code), rx, global).await?;
            print_current(catalog, global, &code)
        }

        ProductsCommand::Create {
            name,
            description,
            price,
            sku,
            inactive,
        } => {
            let form = ProductForm {
                id: String::new(),
                name,
                description,
                active: !inactive,
                price,
                sku,
            };
            let rx = catalog.notifications();
            util::finish(catalog.create(&form), rx, global).await
        }

        ProductsCommand::Update {
            id,
            name,
            description,
            price,
            active,
        } => {
            // Start from the stored product so unspecified fields survive.
            let rx = catalog.notifications();
            util::finish(catalog.search(&id), rx, global).await?;
            let current = current_product(catalog, &id)?;

            let mut form = ProductForm::from(&current);
            form.id = id;
            if let Some(name) = name {
                form.name = name;
            }
            if let Some(description) = description {
                form.description = description;
            }
            if let Some(price) = price {
                form.price = price;
            }
            if let Some(active) = active {
                form.active = active;
            }

            let rx = catalog.notifications();
            util::finish(catalog.update(&form), rx, global).await
        }

        ProductsCommand::Delete { id } => {
            if !util::confirm(&format!("Delete product '{id}'?"), global.yes)? {
                return Ok(());
            }
            let rx = catalog.notifications();
            util::finish(catalog.delete(&id), rx, global).await
        }
    }
}

fn current_product(catalog: &Catalog, id: &str) -> Result<Product, CliError> {
    catalog
        .state()
        .current_product
        .clone()
        .ok_or_else(|| CliError::NotFound {
            message: id.to_owned(),
        })
}

fn print_current(catalog: &Catalog, global: &GlobalOpts, id: &str) -> Result<(), CliError> {
    let product = current_product(catalog, id)?;
    let out = output::render_single(global.output_format(), &product, detail, |p| p.id.clone());
    output::print_output(&out, global.quiet);
    Ok(())
}
