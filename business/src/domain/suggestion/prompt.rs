//! Prompt construction for the dish-quantity planner.
//!
//! Everything here is pure: the same request and catalog always produce the
//! same prompt text, so it can be tested without a completion provider.

use super::model::SuggestionRequest;

const ZERO_PREFERENCE: &str = "N/A (0 preference)";

/// Locally computed quantities embedded in the prompt to show the expected
/// output shape. They are not the answer.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptExamples {
    pub veg: String,
    pub non_veg: String,
    pub vegan: String,
    pub staple: String,
}

impl PromptExamples {
    pub fn for_request(request: &SuggestionRequest) -> Self {
        let multiplier = request.effective_multiplier();
        Self {
            veg: example_quantity(request.veg_count, multiplier),
            non_veg: example_quantity(request.non_veg_count, multiplier),
            vegan: example_quantity(request.vegan_count, multiplier),
            staple: example_staple_quantity(request.total_check_ins, multiplier),
        }
    }
}

/// Example main-dish quantity for one diet.
///
/// Small counts (1..=5) get one spare portion, larger counts a 10% buffer
/// rounded up, then the event multiplier is applied and rounded.
pub fn example_quantity(count: u32, multiplier: f64) -> String {
    if count == 0 {
        return ZERO_PREFERENCE.to_string();
    }

    let count = u64::from(count);
    let buffered = if count <= 5 {
        count + 1
    } else {
        // ceil(count * 1.1) without floating point drift
        (count * 11).div_ceil(10)
    };
    let base = buffered.max(1);

    let adjusted = (base as f64 * multiplier).round().max(0.0) as u64;
    format!("Approx. {} portion{}", adjusted, if adjusted == 1 { "" } else { "s" })
}

/// Example staple quantity: 80% of all check-ins scaled by the event multiplier.
pub fn example_staple_quantity(total_check_ins: u32, multiplier: f64) -> String {
    let covered = f64::from(total_check_ins) * 4.0 / 5.0;
    let base = ((covered * multiplier).ceil().max(1.0)) as u64;
    let buffer = ((multiplier - 1.0) * 100.0).max(5.0).round() as i64;
    format!(
        "Approx. {} portion{} (e.g. {}% buffer)",
        base,
        if base == 1 { "" } else { "s" },
        buffer
    )
}

fn diet_directive(label: &str, field: &str, count: u32) -> String {
    if count == 0 {
        format!(
            "- {field} is 0: do NOT suggest a {label} main dish. If one is listed anyway, its quantity must be \"{ZERO_PREFERENCE}\"."
        )
    } else {
        format!(
            "- {field} is {count}: include a {label} main dish that comfortably serves {count} employees."
        )
    }
}

fn context_lines(request: &SuggestionRequest) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(waste) = request.processed_historical_waste() {
        lines.push(format!(
            "- Historical Waste Percentage: Approximately {waste}. Aim to reduce this."
        ));
    }
    if let Some(multiplier) = request.provided_multiplier() {
        lines.push(format!(
            "- Special Event Multiplier: {multiplier} (1.0 is normal). Adjust main dish quantities accordingly."
        ));
    }
    if let Some(factor) = request.day_of_week_factor.as_deref() {
        lines.push(format!("- Day of Week Insight: {factor}"));
    }
    if lines.is_empty() {
        lines.push("- None provided.".to_string());
    }
    lines
}

fn example_block(request: &SuggestionRequest, examples: &PromptExamples) -> String {
    let waste_note = request
        .processed_historical_waste()
        .map(|w| format!(" Consider past waste of {w}."))
        .unwrap_or_default();
    let day_note = request
        .day_of_week_factor
        .as_deref()
        .map(|f| format!(" Factor in: {f}"))
        .unwrap_or_default();

    let lines = [
        format!(
            r#"    {{ "dishName": "<vegetarian main from Available Dishes>", "quantity": "{}", "note": "Sized from the vegetarian count.{}{}" }}"#,
            examples.veg, waste_note, day_note
        ),
        format!(
            r#"    {{ "dishName": "<non-vegetarian main from Available Dishes>", "quantity": "{}", "note": "Sized from the non-vegetarian count.{}" }}"#,
            examples.non_veg, day_note
        ),
        format!(
            r#"    {{ "dishName": "<vegan option from Available Dishes>", "quantity": "{}", "note": "Sized from the vegan count; if it is 0, say so." }}"#,
            examples.vegan
        ),
        format!(
            r#"    {{ "dishName": "<staple from Available Dishes>", "quantity": "{}", "note": "Serves everyone. Trim the buffer if historical waste is high." }}"#,
            examples.staple
        ),
    ];

    format!("{{\n  \"suggestions\": [\n{}\n  ]\n}}", lines.join(",\n"))
}

/// Renders the full planning prompt.
pub fn build_prompt(
    request: &SuggestionRequest,
    catalog_names: &[String],
    examples: &PromptExamples,
) -> String {
    let dish_list = catalog_names
        .iter()
        .map(|name| format!("- {name}"))
        .collect::<Vec<_>>()
        .join("\n");

    let directives = [
        diet_directive("vegetarian", "vegCount", request.veg_count),
        diet_directive("non-vegetarian", "nonVegCount", request.non_veg_count),
        diet_directive("vegan", "veganCount", request.vegan_count),
    ]
    .join("\n");

    format!(
        r#"You are a kitchen planning assistant for a corporate cafeteria.
Based on the following daily meal check-in data, contextual factors, and the list of available dishes, provide 3-5 dish preparation suggestions.
Your suggestions for 'dishName' MUST be chosen from the 'Available Dishes' list provided below.
Consider a balanced menu and try to minimize potential waste by referring to historical data if available.

Today's Check-in Data:
- Total Employees Checked-in: {total}
- Vegetarian Preferences: {veg}
- Non-Vegetarian Preferences: {non_veg}
- Vegan Preferences: {vegan}

Contextual Factors:
{context}

Today's Dietary Directives:
{directives}

Available Dishes (You MUST select dish names from this list, spelled exactly as shown):
{dish_list}

Quantity Calculation Guide:
- Main dishes are sized DIRECTLY from the count of their dietary preference.
- A preference with a count of 0 gets no main dish, or an explicit quantity of "0 portions" / "{zero}".
- Small counts (1-5) get that exact number plus a tiny buffer (+1 portion).
- Larger counts (over 5) get a small proportional buffer of about 10%.
- Staples (rice, breads) are sized from the total check-ins with a reasonable buffer.
- The effective special event multiplier is {multiplier}. If it is above 1.0, scale main dish quantities by it.
- If historical waste is high (above 10%), be more conservative with every buffer.
- The 'quantity' string must be descriptive, like "Approx. X portions", "Serves Y-Z people" or "{zero}".

General Dish Selection:
- Suggest 3-5 dishes in total, selected EXCLUSIVELY from the 'Available Dishes' list.
- Include appropriate main courses and at least one staple.
- Only suggest a main course for a dietary preference whose count is greater than 0.

The quantities in the example below are computed from today's input SOLELY to illustrate the format and the kind of reasoning expected. Pick dishes for the GIVEN inputs and calculate NEW quantities using the guide above. Do NOT copy or be numerically influenced by the example quantities.

Example output format (illustrative only; replace every placeholder with a dish from the Available Dishes list):
{example}
Output MUST follow the output schema, and every dishName MUST come from the Available Dishes list."#,
        total = request.total_check_ins,
        veg = request.veg_count,
        non_veg = request.non_veg_count,
        vegan = request.vegan_count,
        context = context_lines(request).join("\n"),
        directives = directives,
        dish_list = dish_list,
        zero = ZERO_PREFERENCE,
        multiplier = request.effective_multiplier(),
        example = example_block(request, examples),
    )
}
