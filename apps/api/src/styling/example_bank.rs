//! Few-shot example bank — fixed demonstration pairs shown to the model.
//!
//! Bank order matters: one-shot uses the first entry and the selector's
//! fallback uses the first two.

/// A demonstration pair: what the user sent, and the plan we want back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub user: &'static str,
    pub model: &'static str,
}

/// Read-only table of examples, built once at startup and shared via `Arc`.
#[derive(Debug, Clone)]
pub struct ExampleBank {
    examples: Vec<Example>,
}

impl ExampleBank {
    pub fn new(examples: Vec<Example>) -> Self {
        Self { examples }
    }

    pub fn examples(&self) -> &[Example] {
        &self.examples
    }

    pub fn first(&self) -> Option<&Example> {
        self.examples.first()
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }
}

impl Default for ExampleBank {
    fn default() -> Self {
        Self::new(DEFAULT_EXAMPLES.to_vec())
    }
}

const DEFAULT_EXAMPLES: [Example; 3] = [
    Example {
        user: r#"
Gender: Female
Occasion: Casual Day Out
Budget: ₹3000
Preferences: Comfortable + Chic
Wardrobe: White sneakers, Denim jacket
Styling Context:
Available brands: Zara, H&M, Uniqlo, Urbanic
"#,
        model: r#"
1. Outfit Recommendation: Light blue summer dress (H&M), denim jacket (wardrobe), white sneakers (wardrobe), small crossbody bag (Urbanic).
2. Color Palette & Style Notes: Pastel blue + white for a breezy, chic vibe; relaxed silhouette for comfort.
3. Estimated Costs: Dress ₹1800, Bag ₹900 → Total ₹2700 (within ₹3000).
4. Styling Tips: Add subtle silver studs; light sunscreen + gloss; steam dress to keep it crisp.
"#,
    },
    Example {
        user: r#"
Gender: Male
Occasion: Business Meeting (Rainy)
Budget: ₹5000
Preferences: Formal, minimal accessories
Wardrobe: Black leather belt
Styling Context:
Available brands: Zara, H&M, Uniqlo, Urbanic
"#,
        model: r#"
1. Outfit Recommendation: Navy blazer (Zara), light blue oxford shirt (Uniqlo), charcoal trousers (H&M), brown derby shoes (H&M), black belt (wardrobe), compact umbrella.
2. Color Palette & Style Notes: Navy, charcoal, light blue—sharp and professional; water-friendly outer layer.
3. Estimated Costs: Shirt ₹1000 (H&M), Trousers ₹1200 (H&M), Shoes ₹1800 (H&M), Lightweight raincoat ₹1200 (Urbanic) → Total ₹5000 exact.
4. Styling Tips: Keep hair neat; carry a lint roller; fold a spare dry handkerchief; quick polish on shoes.
"#,
    },
    Example {
        user: r#"
Gender: Non-binary
Occasion: Evening Date (Warm)
Budget: ₹4000
Preferences: Smart-casual, soft fabrics, subtle statement
Wardrobe: Slim black trousers
Styling Context:
Available brands: Zara, H&M, Uniqlo, Urbanic
"#,
        model: r#"
1. Outfit Recommendation: Relaxed-fit satin shirt (Urbanic), slim black trousers (wardrobe), loafers (H&M), minimal chain necklace (Urbanic), compact sling bag.
2. Color Palette & Style Notes: Black + deep jewel tone (emerald/burgundy) for soft elegance; breathable fabric keeps it comfy in warm evenings.
3. Estimated Costs: Shirt ₹1600, Loafers ₹1400, Necklace ₹400 → Total ₹3400 (within budget).
4. Styling Tips: Half-tuck shirt; gentle fragrance; moisturize + anti-frizz serum for a clean finish.
"#,
    },
];
