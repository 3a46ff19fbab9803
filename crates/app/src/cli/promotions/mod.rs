use std::path::PathBuf;

use backoffice::catalog::{Catalog, Product};
use backoffice_app::domain::promotions::{PromotionEditor, models::PromotionId};
use clap::{Args, Subcommand};

use super::{Backoffice, table};

mod draft_file;

use draft_file::DraftFile;

#[derive(Debug, Args)]
pub(crate) struct PromotionsCommand {
    #[command(subcommand)]
    command: PromotionsSubcommand,
}

#[derive(Debug, Subcommand)]
enum PromotionsSubcommand {
    /// List all promotions
    List,

    /// Show one promotion with its lines
    Show(PromotionArgs),

    /// Create a promotion from a YAML draft
    Create(DraftArgs),

    /// Replace a promotion with a YAML draft
    Update(UpdateArgs),

    /// Delete a promotion
    Delete(PromotionArgs),
}

#[derive(Debug, Args)]
struct PromotionArgs {
    /// Promotion id
    #[arg(long)]
    id: PromotionId,
}

#[derive(Debug, Args)]
struct DraftArgs {
    /// Path to the YAML draft
    #[arg(long)]
    file: PathBuf,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    /// Promotion id
    #[arg(long)]
    id: PromotionId,

    /// Path to the YAML draft
    #[arg(long)]
    file: PathBuf,
}

pub(crate) async fn run(backoffice: &Backoffice, command: PromotionsCommand) -> Result<(), String> {
    match command.command {
        PromotionsSubcommand::List => list(backoffice).await,
        PromotionsSubcommand::Show(args) => show(backoffice, args.id).await,
        PromotionsSubcommand::Create(args) => save(backoffice, None, args.file).await,
        PromotionsSubcommand::Update(args) => save(backoffice, Some(args.id), args.file).await,
        PromotionsSubcommand::Delete(args) => delete(backoffice, args.id).await,
    }
}

async fn list(backoffice: &Backoffice) -> Result<(), String> {
    let promotions = backoffice
        .ctx
        .promotions
        .list_promotions(&backoffice.session)
        .await
        .map_err(|error| format!("failed to list promotions: {error}"))?;

    let rows = promotions
        .into_iter()
        .map(|record| {
            [
                record.id.to_string(),
                record.promotion.code,
                record.promotion.name,
                record.promotion.is_active.to_string(),
                record.promotion.start_date.to_string(),
                record.promotion.end_date.to_string(),
                record.promotion.rules.len().to_string(),
            ]
        })
        .collect();

    println!(
        "{}",
        table(["ID", "Code", "Name", "Active", "Starts", "Ends", "Lines"], rows)
    );

    Ok(())
}

async fn show(backoffice: &Backoffice, id: PromotionId) -> Result<(), String> {
    let record = backoffice
        .ctx
        .promotions
        .get_promotion(&backoffice.session, id)
        .await
        .map_err(|error| format!("failed to load promotion: {error}"))?;

    let catalog = load_catalog(backoffice).await?;

    println!("promotion_id: {}", record.id);
    println!("name: {}", record.promotion.name);
    println!("code: {}", record.promotion.code);
    println!("active: {}", record.promotion.is_active);
    println!("starts: {}", record.promotion.start_date);
    println!("ends: {}", record.promotion.end_date);
    if let Some(image_url) = &record.image_url {
        println!("image: {image_url}");
    }

    let editor = PromotionEditor::editing(record)
        .map_err(|error| format!("failed to read promotion lines: {error}"))?;

    let rows = editor
        .draft()
        .pairs
        .iter()
        .zip(editor.labels(&catalog, backoffice.currency))
        .map(|(pair, labels)| {
            [
                pair.rule().rule_type().to_string(),
                labels.rule,
                pair.action().action_type().to_string(),
                labels.action,
            ]
        })
        .collect();

    println!(
        "{}",
        table(["Applies to", "Condition", "Discount", "Value"], rows)
    );

    Ok(())
}

async fn save(backoffice: &Backoffice, id: Option<PromotionId>, file: PathBuf) -> Result<(), String> {
    let draft_file = DraftFile::read(&file)?;
    let image = draft_file.load_image(&file)?;

    let draft = draft_file.header();

    let mut editor = match id {
        Some(id) => PromotionEditor::replacing(id, draft),
        None => PromotionEditor::new(draft),
    };

    editor.set_image(image);

    let mut report = Vec::new();

    for (index, line) in draft_file.lines.iter().enumerate() {
        if let Err(error) = editor.add_pair(&line.rule, &line.action) {
            report.push(format!("line {}: {}: {error}", index + 1, error.title()));
        }
    }

    if !report.is_empty() {
        return Err(format!("draft has invalid lines:\n{}", report.join("\n")));
    }

    let saved = editor
        .submit(backoffice.ctx.promotions.as_ref(), &backoffice.session)
        .await
        .map_err(|error| format!("{}: {error}", error.title()))?;

    println!("promotion_id: {}", saved.id);
    println!("code: {}", saved.promotion.code);
    println!("lines: {}", saved.promotion.rules.len());

    Ok(())
}

async fn delete(backoffice: &Backoffice, id: PromotionId) -> Result<(), String> {
    backoffice
        .ctx
        .promotions
        .delete_promotion(&backoffice.session, id)
        .await
        .map_err(|error| format!("failed to delete promotion: {error}"))?;

    println!("deleted promotion {id}");

    Ok(())
}

async fn load_catalog(backoffice: &Backoffice) -> Result<Catalog, String> {
    let products = backoffice
        .ctx
        .products
        .list_products(&backoffice.session)
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    let categories = backoffice
        .ctx
        .categories
        .list_categories(&backoffice.session)
        .await
        .map_err(|error| format!("failed to list categories: {error}"))?;

    Ok(Catalog::new(
        products.iter().map(Product::from).collect(),
        categories,
    ))
}
