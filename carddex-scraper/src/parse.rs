//! Cardlist page parsing.
//!
//! One parser, two strategies. The page normally carries one
//! `div.p-modal` node per card, parsed with structured selectors. When
//! the markup yields no modal nodes at all, the parser falls back to
//! plain-text extraction anchored on `F-###` numbers, pulling the
//! labelled fields out with regexes. Missing fields degrade to absent
//! fields; a record is only skipped when no number can be found for it.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use carddex_core::record::{CardCost, CardRecord, PowerValue};

use crate::error::ScrapeError;

mod sel {
    use std::sync::LazyLock;

    use scraper::Selector;

    pub static MODAL: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.p-modal").unwrap());
    pub static NUMBER: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.p-modalHeadInfo__num").unwrap());
    pub static NAME: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.p-modalHeadTitle").unwrap());
    pub static RARITY: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.p-modalHeadInfo__rare").unwrap());
    pub static COST_TOTAL: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("span.p-modalCost__totalNum").unwrap());
    pub static COST_ICON: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.p-modalCost__icon img").unwrap());
    pub static PROPERTY: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.p-modalPropertiesItem").unwrap());
    pub static PROPERTY_TAG: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.p-modalPropertiesItem__tag").unwrap());
    pub static PROPERTY_VALUE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.p-modalPropertiesItemArea__txt").unwrap());
    pub static PROPERTY_AREA: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.p-modalPropertiesItemArea").unwrap());
    pub static PROFILE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.p-modalProfile").unwrap());
    pub static IMAGE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.p-modalImg img").unwrap());
}

static HEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"身長[：:]?\s*(\d+\.?\d*)\s*cm").unwrap());
static WEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"体重[：:]?\s*(\d+\.?\d*)\s*kg").unwrap());

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"F-\d+(?:-P)?(?:\s*\(P\))?").unwrap());
static RARITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"レアリティ[：:]?\s*([A-Z]+(?:-P)?)").unwrap());
static COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"色[：:]?\s*([赤青黄緑無])").unwrap());
static TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"カードタイプ[：:]?\s*(\S+)").unwrap());
static POWER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"パワー[：:]?\s*(\d+)").unwrap());
static COST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"コスト[：:]?\s*(\d+)").unwrap());

/// Parse every card on the cardlist page.
///
/// `base_url` resolves site-relative image links.
pub fn parse_cardlist(html: &str, base_url: &str) -> Result<Vec<CardRecord>, ScrapeError> {
    let document = Html::parse_document(html);

    let modals: Vec<ElementRef> = document.select(&sel::MODAL).collect();
    let cards = if modals.is_empty() {
        log::warn!("No card modals in page, falling back to text extraction");
        let text: String = document.root_element().text().collect();
        parse_text(&text)
    } else {
        log::info!("Found {} card modals", modals.len());
        modals
            .into_iter()
            .filter_map(|modal| parse_modal(modal, base_url))
            .collect()
    };

    if cards.is_empty() {
        return Err(ScrapeError::parse("no cards found in cardlist page"));
    }
    Ok(cards)
}

// ── Structured strategy ─────────────────────────────────────────────

fn parse_modal(modal: ElementRef, base_url: &str) -> Option<CardRecord> {
    // A modal without a number cannot be keyed; everything else may be
    // absent.
    let number = text_of(modal, &sel::NUMBER).filter(|n| !n.is_empty())?;

    let mut card = CardRecord::new(number);
    card.name = text_of(modal, &sel::NAME).unwrap_or_default();
    card.rarity = text_of(modal, &sel::RARITY).unwrap_or_default();
    card.cost = Some(parse_cost(modal));

    for prop in modal.select(&sel::PROPERTY) {
        let Some(tag) = text_of(prop, &sel::PROPERTY_TAG) else {
            continue;
        };
        let value = text_of(prop, &sel::PROPERTY_VALUE);

        match tag.as_str() {
            "色" => card.color = value,
            "カードタイプ" => card.card_type = value,
            "属性" => card.attribute = value,
            "感情" => card.emotion = value,
            "パワー" => card.power = value.map(parse_power),
            "能力" => card.ability = value,
            "フレーバーテキスト" => {
                // Flavor text spans several nodes, so take the whole
                // area rather than the first text element.
                card.flavor_text = prop
                    .select(&sel::PROPERTY_AREA)
                    .next()
                    .map(spaced_text)
                    .or(value);
            }
            _ => {}
        }
    }

    if let Some(profile) = modal.select(&sel::PROFILE).next() {
        let text: String = profile.text().collect();
        card.height = capture(&HEIGHT_RE, &text);
        card.weight = capture(&WEIGHT_RE, &text);
    }

    if let Some(img) = modal.select(&sel::IMAGE).next()
        && let Some(src) = img.value().attr("src")
        && !src.is_empty()
    {
        card.image_url = Some(absolutize(base_url, src));
    }

    set_variant_flags(&mut card);
    Some(card)
}

fn parse_cost(modal: ElementRef) -> CardCost {
    let mut cost = CardCost::default();

    if let Some(total) = text_of(modal, &sel::COST_TOTAL) {
        cost.total = total.parse().unwrap_or(0);
    }

    for img in modal.select(&sel::COST_ICON) {
        let src = img.value().attr("src").unwrap_or_default();
        let alt = img.value().attr("alt").unwrap_or_default();

        if src.contains("cost-red") || alt.contains('赤') {
            cost.red += 1;
        } else if src.contains("cost-blue") || alt.contains('青') {
            cost.blue += 1;
        } else if src.contains("cost-yellow") || alt.contains('黄') || alt.contains('黃') {
            cost.yellow += 1;
        } else if src.contains("cost-green") || alt.contains('緑') {
            cost.green += 1;
        } else if src.contains("cost-mu") || alt.contains("無色") {
            cost.colorless += 1;
        }
    }

    cost
}

// ── Text fallback ───────────────────────────────────────────────────

/// Extract cards from the page's plain text, splitting on card-number
/// anchors.
fn parse_text(text: &str) -> Vec<CardRecord> {
    let anchors: Vec<regex::Match> = NUMBER_RE.find_iter(text).collect();

    let mut cards = Vec::with_capacity(anchors.len());
    for (i, anchor) in anchors.iter().enumerate() {
        let end = anchors
            .get(i + 1)
            .map(|next| next.start())
            .unwrap_or(text.len());
        let block = &text[anchor.start()..end];

        let mut card = CardRecord::new(anchor.as_str().trim());
        card.name = block_name(block).unwrap_or_default();
        card.rarity = capture(&RARITY_RE, block).unwrap_or_default();
        card.color = capture(&COLOR_RE, block);
        card.card_type = capture(&TYPE_RE, block);
        card.power = capture(&POWER_RE, block).map(parse_power);
        if let Some(total) = capture(&COST_RE, block) {
            card.cost = Some(CardCost {
                total: total.parse().unwrap_or(0),
                ..CardCost::default()
            });
        }
        card.height = capture(&HEIGHT_RE, block);
        card.weight = capture(&WEIGHT_RE, block);

        set_variant_flags(&mut card);
        cards.push(card);
    }

    cards
}

/// The first non-empty line after the number line that isn't a
/// labelled field is the card name.
fn block_name(block: &str) -> Option<String> {
    const LABELS: [&str; 4] = ["レアリティ", "タイプ", "コスト", "属性"];

    block
        .lines()
        .skip(1)
        .map(str::trim)
        .find(|line| !line.is_empty() && !LABELS.iter().any(|label| line.contains(label)))
        .map(str::to_string)
}

// ── Shared helpers ──────────────────────────────────────────────────

fn text_of(el: ElementRef, selector: &Selector) -> Option<String> {
    el.select(selector).next().map(|node| {
        node.text()
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    })
}

/// Text with single spaces between nodes, for multi-node blocks.
fn spaced_text(el: ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn parse_power(value: String) -> PowerValue {
    match value.parse::<i64>() {
        Ok(n) => PowerValue::Number(n),
        Err(_) => PowerValue::Text(value),
    }
}

fn absolutize(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!("{}/{}", base_url.trim_end_matches('/'), href.trim_start_matches('/'))
    }
}

/// Surface flags kept in the JSON for compatibility with historical
/// store files.
fn set_variant_flags(card: &mut CardRecord) {
    card.is_promo = card.number.contains("(P)") || card.number.ends_with("-P");
    card.is_parallel = card.rarity.contains("-P");
}
