use crate::{db::TasteRepository, error::AppResult, models::NewDish};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn dish(
    name: &str,
    attributes: [f64; 6],
    cuisines: &[&str],
    textures: &[&str],
    sensitive_ingredients: &[&str],
    dietary_restrictions: &[&str],
    allergies: &[&str],
) -> NewDish {
    NewDish {
        cuisines: strings(cuisines),
        textures: strings(textures),
        sensitive_ingredients: strings(sensitive_ingredients),
        dietary_restrictions: strings(dietary_restrictions),
        allergies: strings(allergies),
        ..NewDish::new(name, attributes)
    }
}

/// Reference catalog of ten dishes
///
/// Attributes are `[sweet, sour, salty, bitter, umami, spice]` on the 0..10 scale.
pub fn seed_catalog() -> Vec<NewDish> {
    vec![
        dish(
            "Margherita Pizza",
            [2.0, 1.0, 4.0, 1.0, 5.0, 1.0],
            &["Italian"],
            &["chewy", "creamy"],
            &[],
            &["vegetarian"],
            &[],
        ),
        dish(
            "Beef Pho",
            [2.0, 2.0, 5.0, 0.0, 8.0, 1.0],
            &["Vietnamese"],
            &["brothy", "tender"],
            &[],
            &[],
            &["beef"],
        ),
        dish(
            "Guacamole",
            [1.0, 3.0, 2.0, 0.0, 2.0, 2.0],
            &["Mexican"],
            &["creamy", "chunky"],
            &[],
            &["vegetarian", "vegan", "gluten-free"],
            &["avocado"],
        ),
        dish(
            "Miso Ramen",
            [1.0, 0.0, 4.0, 1.0, 9.0, 2.0],
            &["Japanese"],
            &["chewy", "silky"],
            &["soy"],
            &[],
            &["soy"],
        ),
        dish(
            "Pad Thai",
            [3.0, 4.0, 4.0, 0.0, 6.0, 3.0],
            &["Thai"],
            &["chewy", "crispy"],
            &["peanuts", "fish sauce"],
            &["gluten-free"],
            &["peanuts", "shellfish"],
        ),
        dish(
            "Falafel",
            [1.0, 0.0, 3.0, 0.0, 3.0, 2.0],
            &["Middle Eastern"],
            &["crispy", "grainy"],
            &[],
            &["vegetarian", "vegan"],
            &["legumes"],
        ),
        dish(
            "Tiramisu",
            [5.0, 0.0, 1.0, 1.0, 2.0, 0.0],
            &["Italian"],
            &["creamy", "airy"],
            &["coffee", "egg"],
            &["vegetarian"],
            &["egg", "dairy"],
        ),
        dish(
            "Korean Fried Chicken",
            [3.0, 0.0, 5.0, 0.0, 5.0, 4.0],
            &["Korean"],
            &["crispy", "juicy"],
            &["soy"],
            &[],
            &["soy"],
        ),
        dish(
            "Caprese Salad",
            [2.0, 1.0, 3.0, 0.0, 4.0, 0.0],
            &["Italian"],
            &["juicy", "creamy"],
            &[],
            &["vegetarian", "gluten-free"],
            &["dairy"],
        ),
        dish(
            "Beef Bulgogi",
            [4.0, 1.0, 5.0, 0.0, 6.0, 2.0],
            &["Korean"],
            &["tender", "juicy"],
            &["soy"],
            &[],
            &["soy"],
        ),
    ]
}

/// Inserts the reference catalog when the store has no dishes yet.
///
/// Returns the number of dishes inserted.
pub async fn seed_if_empty(repository: &dyn TasteRepository) -> AppResult<usize> {
    let existing = repository.count_dishes().await?;
    if existing > 0 {
        tracing::info!(existing, "Dish catalog already populated, skipping seed");
        return Ok(0);
    }

    let catalog = seed_catalog();
    let count = catalog.len();
    for dish in catalog {
        repository.insert_dish(dish).await?;
    }

    tracing::info!(count, "Seeded dish catalog");
    Ok(count)
}
