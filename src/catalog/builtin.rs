// src/catalog/builtin.rs

//! Compiled-in recipe data
//!
//! Imported verbatim from the original dataset, duplicates and all. Order
//! matters: name lookup is first-match-wins, so entries must stay in this
//! sequence.

use crate::catalog::Catalog;
use crate::ingredient::Ingredient;
use crate::recipe::Recipe;

fn recipe(name: &str, ingredients: &[&str], steps: &str) -> Recipe {
    Recipe::new(
        name,
        ingredients.iter().map(Ingredient::new).collect(),
        steps,
    )
}

/// Build the builtin catalog
pub(super) fn build() -> Catalog {
    Catalog::new(vec![
        recipe(
            "Biryani",
            &["rice", "chicken", "yogurt", "spices", "onion"],
            "1. Marinate chicken with yogurt and spices.\n2. Fry onions until golden brown.\n3. Layer rice, chicken, and fried onions in a pot.\n4. Cook on low heat until rice is fully cooked.",
        ),
        recipe(
            "Fried Chicken",
            &["chicken pieces", "flour", "spices", "garlic powder", "oil"],
            "1. Marinate chicken with spices and garlic powder.\n2. Coat chicken pieces in flour.\n3. Fry in hot oil until crispy.",
        ),
        recipe(
            "Methi Thepla",
            &["fenugreek leaves", "flour", "yogurt", "spices", "oil"],
            "1. Make dough with fenugreek leaves, flour, yogurt, and spices.\n2. Roll out into flatbreads and cook on a griddle with a little oil.",
        ),
        recipe(
            "Sajji",
            &["whole chicken", "spices", "yogurt", "garlic", "lemon"],
            "1. Marinate chicken with yogurt, spices, garlic, and lemon juice.\n2. Roast the whole chicken until tender.",
        ),
        recipe(
            "Dahi Ke Kebab",
            &["yogurt", "paneer", "spices", "ginger", "cilantro"],
            "1. Mix yogurt, paneer, and spices.\n2. Shape into kebabs and cook on a grill or fry in a pan.",
        ),
        recipe(
            "Korma",
            &["chicken", "onion", "yogurt", "spices", "garlic"],
            "1. Brown onions and garlic.\n2. Add chicken and spices.\n3. Cook with yogurt until tender.",
        ),
        recipe(
            "Peshawari Chapli Kebab",
            &["minced beef", "onion", "tomato", "spices", "green chilies"],
            "1. Mix minced beef with onions, tomatoes, chilies, and spices.\n2. Shape into patties and fry.",
        ),
        recipe(
            "Lassi",
            &["yogurt", "water", "sugar", "mint"],
            "1. Blend yogurt, water, sugar, and mint.\n2. Serve chilled.",
        ),
        recipe(
            "Palak Gosht",
            &["mutton", "spinach", "onion", "garlic", "spices"],
            "1. Fry onions and garlic.\n2. Add mutton and cook until browned.\n3. Add spinach and spices, cook until tender.",
        ),
        recipe(
            "Bhel Puri",
            &["puffed rice", "onion", "tomato", "coriander", "tamarind chutney"],
            "1. Mix puffed rice with chopped vegetables and coriander.\n2. Add tamarind chutney and spices.",
        ),
        recipe(
            "Shami Kebab",
            &["minced meat", "lentils", "onion", "spices", "egg"],
            "1. Cook minced meat with lentils and spices.\n2. Grind into a smooth mixture, shape into patties, and fry.",
        ),
        recipe(
            "Tandoori Roti",
            &["flour", "yeast", "water", "salt", "ghee"],
            "1. Make dough with yeast and flour.\n2. Roll into rotis and bake in a tandoor.\n3. Brush with ghee.",
        ),
        recipe(
            "Chicken Jalfrezi",
            &["chicken", "bell peppers", "onion", "tomato", "spices"],
            "1. Stir-fry chicken with onions, bell peppers, and tomatoes.\n2. Add spices and cook until tender.",
        ),
        recipe(
            "Mutton Seekh Kebab",
            &["minced mutton", "onions", "green chilies", "spices", "coriander"],
            "1. Mix minced mutton with onions, chilies, and spices.\n2. Shape into skewers and grill or fry.",
        ),
        recipe(
            "Gajar Ka Halwa",
            &["carrots", "milk", "sugar", "ghee", "cardamom"],
            "1. Grate carrots and cook them in milk.\n2. Add sugar, ghee, and cardamom, cook until thick.",
        ),
        recipe(
            "Lemon Rice",
            &["rice", "lemon", "mustard seeds", "curry leaves", "green chilies"],
            "1. Cook rice.\n2. Heat mustard seeds, curry leaves, and chilies.\n3. Add lemon juice to rice and mix.",
        ),
        recipe(
            "Chana Chaat",
            &["chickpeas", "onion", "tomato", "cucumber", "spices"],
            "1. Boil chickpeas and mix with diced veggies.\n2. Add spices and lemon juice.",
        ),
        recipe(
            "Dahi Puri",
            &["pani puri shells", "yogurt", "potatoes", "tamarind chutney", "spices"],
            "1. Fill puris with boiled potatoes.\n2. Add yogurt, tamarind chutney, and sprinkle with spices.",
        ),
        recipe(
            "Pista Kulfi",
            &["milk", "sugar", "pistachios", "cardamom"],
            "1. Boil milk with sugar and cardamom until thick.\n2. Add crushed pistachios and freeze in molds.",
        ),
        recipe(
            "Chicken Malai Tikka",
            &["chicken", "yogurt", "cream", "spices", "lemon juice"],
            "1. Marinate chicken with yogurt, cream, spices, and lemon juice.\n2. Grill the chicken until cooked.",
        ),
        recipe(
            "Fish Karahi",
            &["fish", "onion", "tomato", "garlic", "green chilies"],
            "1. Fry onions and garlic in oil.\n2. Add fish and cook with tomatoes and spices.",
        ),
        recipe(
            "Chana Daal",
            &["chana daal", "onion", "tomato", "spices", "garlic"],
            "1. Boil chana daal until tender.\n2. Fry onions and tomatoes with spices.\n3. Add to daal and cook for a few minutes.",
        ),
        recipe(
            "Methi Aloo",
            &["potatoes", "fenugreek leaves", "onions", "spices"],
            "1. Fry onions until golden.\n2. Add potatoes and spices, cook until tender.\n3. Add fenugreek leaves and cook for a few more minutes.",
        ),
        recipe(
            "Samosa",
            &["flour", "potatoes", "peas", "spices", "oil"],
            "1. Boil and mash potatoes and peas.\n2. Add spices and fill the mixture into rolled dough triangles.\n3. Deep fry until golden.",
        ),
        recipe(
            "Vegetable Biryani",
            &["rice", "vegetables", "yogurt", "spices", "onion"],
            "1. Marinate vegetables with yogurt and spices.\n2. Layer rice, vegetables, and fried onions.\n3. Cook until rice is done.",
        ),
        recipe(
            "Kebabs",
            &["minced meat", "onion", "spices", "garlic"],
            "1. Mix minced meat with spices and onions.\n2. Shape into skewers and grill or fry.",
        ),
        recipe(
            "Masala Chai",
            &["tea leaves", "milk", "cardamom", "ginger", "sugar"],
            "1. Boil tea leaves, ginger, and cardamom in water.\n2. Add milk and sugar, simmer until it boils.",
        ),
        recipe(
            "Mutton Pulao",
            &["mutton", "rice", "onion", "garlic", "spices"],
            "1. Brown mutton with onions and garlic.\n2. Add rice and spices, cook until rice is tender.",
        ),
        recipe(
            "Haleem",
            &["wheat", "lentils", "chicken", "spices", "ghee"],
            "1. Cook wheat and lentils until soft.\n2. Blend the mixture and add cooked chicken.\n3. Simmer with spices and ghee.",
        ),
        recipe(
            "Aloo Keema",
            &["minced meat", "potatoes", "onion", "tomato", "spices"],
            "1. Cook minced meat with onions, tomatoes, and spices.\n2. Add diced potatoes and cook until tender.",
        ),
        recipe(
            "Zarda",
            &["rice", "sugar", "milk", "cardamom", "saffron"],
            "1. Cook rice with sugar, milk, and cardamom.\n2. Add saffron and garnish with nuts.",
        ),
        recipe(
            "Dahi Bhalla",
            &["dal", "yogurt", "tamarind chutney", "spices", "cilantro"],
            "1. Soak dal vadas in water and top with yogurt.\n2. Add tamarind chutney and sprinkle spices.",
        ),
        recipe(
            "Pani Puri",
            &["puri shells", "potatoes", "chickpeas", "spices", "tamarind chutney"],
            "1. Fill puris with chickpeas and potatoes.\n2. Pour tamarind chutney and top with spices.",
        ),
        recipe(
            "Shahi Malai",
            &["milk", "sugar", "cardamom", "saffron", "ghee"],
            "1. Boil milk with sugar and cardamom.\n2. Garnish with saffron and ghee.",
        ),
        recipe(
            "Vegetable Samosa",
            &["flour", "potatoes", "peas", "spices", "oil"],
            "1. Prepare dough and roll it out.\n2. Fill with a mixture of vegetables and spices.\n3. Fry until golden.",
        ),
        recipe(
            "Methi Paratha",
            &["flour", "fenugreek leaves", "spices", "ghee"],
            "1. Make dough with fenugreek leaves, flour, and spices.\n2. Roll out into parathas and cook on a griddle with ghee.",
        ),
        recipe(
            "Mutton Karahi",
            &["mutton", "onion", "tomato", "garlic", "spices"],
            "1. Fry onions and garlic in oil.\n2. Add mutton and cook until browned.\n3. Add tomatoes and spices, cook until tender.",
        ),
        recipe(
            "Pasta",
            &["pasta", "tomato sauce", "chicken", "garlic", "cheese"],
            "1. Cook pasta.\n2. Stir-fry chicken with garlic and tomato sauce.\n3. Mix pasta with chicken and top with cheese.",
        ),
        recipe(
            "Chana Daal Tikki",
            &["chana daal", "spices", "green chilies", "onions"],
            "1. Boil chana daal and mash it.\n2. Shape into patties and fry until golden brown.",
        ),
        recipe(
            "Fried Fish",
            &["fish", "spices", "flour", "oil"],
            "1. Marinate fish with spices.\n2. Coat in flour and deep fry until crispy.",
        ),
        recipe(
            "Pasta Karahi",
            &["pasta", "chicken", "tomato", "green chilies", "spices"],
            "1. Cook pasta.\n2. Cook chicken with tomatoes and spices.\n3. Toss pasta in the chicken mixture.",
        ),
        recipe(
            "Chana Masala",
            &["chickpeas", "onion", "tomato", "garlic", "spices"],
            "1. Boil chickpeas until tender.\n2. Fry onions and tomatoes, add spices.\n3. Add chickpeas and cook together.",
        ),
        recipe(
            "Bengan Bharta",
            &["eggplant", "onion", "tomato", "garlic", "spices"],
            "1. Roast eggplant until soft.\n2. Mash and cook with onions, tomatoes, garlic, and spices.",
        ),
        recipe(
            "Aloo Paratha",
            &["flour", "potatoes", "spices", "ghee"],
            "1. Make dough and stuff with spiced mashed potatoes.\n2. Roll out into parathas and cook with ghee.",
        ),
        recipe(
            "Seekh Kebab",
            &["minced meat", "onion", "green chilies", "spices", "cilantro"],
            "1. Mix minced meat with onions, spices, and chilies.\n2. Shape into skewers and grill.",
        ),
        recipe(
            "Cucumber Raita",
            &["yogurt", "cucumber", "spices", "cilantro"],
            "1. Grate cucumber and mix with yogurt.\n2. Add spices and cilantro.",
        ),
        recipe(
            "Prawn Masala",
            &["prawns", "onion", "tomato", "spices", "garlic"],
            "1. Fry onions and garlic in oil.\n2. Add prawns and cook until pink.\n3. Add tomatoes and spices, cook until done.",
        ),
        recipe(
            "Gulab Jamun",
            &["milk powder", "flour", "sugar", "ghee", "rose water"],
            "1. Make dough with milk powder and flour.\n2. Shape into balls and fry in ghee.\n3. Soak in sugar syrup with rose water.",
        ),
        recipe(
            "Kacha Gola",
            &["crushed ice", "syrup", "lemon juice", "salt"],
            "1. Shave ice and pack it in a cup.\n2. Pour flavored syrup and sprinkle with salt.",
        ),
        recipe(
            "Chana Chaat",
            &["chickpeas", "onion", "tomato", "cucumber", "spices"],
            "1. Boil chickpeas and chop vegetables.\n2. Add spices and lemon juice.\n3. Mix well and serve.",
        ),
        recipe(
            "Samosa Chaat",
            &["samosa", "yogurt", "chili chutney", "spices", "coriander"],
            "1. Crush samosas.\n2. Pour yogurt and chili chutney over it.\n3. Garnish with spices and coriander.",
        ),
        recipe(
            "Chicken Shawarma",
            &["chicken", "yogurt", "garlic", "spices", "flatbread"],
            "1. Marinate chicken with yogurt, garlic, and spices.\n2. Grill chicken and slice thin.\n3. Serve in flatbread.",
        ),
        recipe(
            "Kheer",
            &["milk", "rice", "sugar", "cardamom", "almonds"],
            "1. Boil rice in milk.\n2. Add sugar, cardamom, and cook until thick.\n3. Garnish with almonds.",
        ),
        recipe(
            "Chicken Pulao",
            &["chicken", "rice", "onion", "garlic", "spices"],
            "1. Brown chicken with onions and garlic.\n2. Add rice and spices, cook until rice is done.",
        ),
        recipe(
            "Kacha Gosht",
            &["mutton", "onions", "ginger", "garlic", "spices"],
            "1. Marinate mutton with spices.\n2. Cook in a sealed pot with onions, ginger, and garlic.",
        ),
        recipe(
            "Chana Daal",
            &["chana daal", "onion", "tomato", "garlic", "spices"],
            "1. Boil chana daal until tender.\n2. Fry onions and tomatoes with spices.\n3. Add to daal and cook.",
        ),
        recipe(
            "Shahi Korma",
            &["chicken", "yogurt", "cream", "spices", "onion"],
            "1. Brown onions and cook chicken.\n2. Add yogurt, cream, and spices, cook until thick.",
        ),
        recipe(
            "Egg Bhurji",
            &["eggs", "onion", "green chilies", "tomato", "spices"],
            "1. Scramble eggs with onions, tomatoes, and chilies.\n2. Add spices and cook until done.",
        ),
        recipe(
            "Aloo Tikki",
            &["potatoes", "onion", "spices", "green chilies", "oil"],
            "1. Boil and mash potatoes.\n2. Shape into patties with onions, chilies, and spices.\n3. Fry until golden.",
        ),
        recipe(
            "Mango Lassi",
            &["mango", "yogurt", "milk", "sugar"],
            "1. Blend mango, yogurt, milk, and sugar.\n2. Serve chilled.",
        ),
        recipe(
            "Chicken Korma",
            &["chicken", "yogurt", "spices", "onion", "garlic"],
            "1. Fry onions and garlic.\n2. Add chicken and spices, cook until browned.\n3. Add yogurt and simmer.",
        ),
        recipe(
            "Nihari",
            &["mutton", "onion", "spices", "flour", "garlic"],
            "1. Cook mutton with onions, garlic, and spices.\n2. Thicken with flour and cook until tender.",
        ),
        recipe(
            "Masala Dosa",
            &["rice flour", "potatoes", "onion", "spices", "oil"],
            "1. Make a dosa batter from rice flour.\n2. Cook a spiced potato filling.\n3. Serve dosa with filling.",
        ),
        recipe(
            "Gulab Jamun",
            &["milk powder", "flour", "sugar", "ghee", "rose water"],
            "1. Make dough with milk powder and flour.\n2. Shape into balls and fry in ghee.\n3. Soak in sugar syrup with rose water.",
        ),
        recipe(
            "Haleem",
            &["wheat", "lentils", "chicken", "spices", "ghee"],
            "1. Cook wheat and lentils until soft.\n2. Blend the mixture and add cooked chicken.\n3. Simmer with spices and ghee.",
        ),
        recipe(
            "Baked Chicken Wings",
            &["chicken wings", "garlic powder", "paprika", "spices", "oil"],
            "1. Season chicken wings with garlic, paprika, and spices.\n2. Bake in the oven until crispy.",
        ),
        recipe(
            "Gajar Halwa",
            &["carrots", "milk", "sugar", "ghee", "cardamom"],
            "1. Grate carrots and cook them in milk.\n2. Add sugar, ghee, and cardamom, cook until thick.",
        ),
        recipe(
            "Chana Masala",
            &["chickpeas", "onion", "tomato", "garlic", "spices"],
            "1. Boil chickpeas until tender.\n2. Fry onions and tomatoes, add spices.\n3. Add chickpeas and cook together.",
        ),
        recipe(
            "Keema Paratha",
            &["flour", "minced meat", "onion", "spices", "ghee"],
            "1. Cook minced meat with spices and onions.\n2. Stuff the mixture in paratha dough and cook with ghee.",
        ),
        recipe(
            "Biryani",
            &["rice", "chicken", "yogurt", "spices", "onion"],
            "1. Marinate chicken with yogurt and spices.\n2. Fry onions until golden brown.\n3. Layer rice, chicken, and fried onions in a pot.\n4. Cook on low heat until rice is fully cooked.",
        ),
        recipe(
            "Kofta Curry",
            &["minced meat", "onion", "spices", "garlic", "yogurt"],
            "1. Make meatballs with minced meat, onions, and spices.\n2. Fry meatballs and add to curry made from garlic, onions, and yogurt.",
        ),
        recipe(
            "Gosht Karahi",
            &["mutton", "onion", "tomato", "green chilies", "spices"],
            "1. Fry onions and tomatoes.\n2. Add mutton and cook with spices.\n3. Simmer until tender.",
        ),
        recipe(
            "Aloo Keema",
            &["minced meat", "potatoes", "onion", "tomato", "spices"],
            "1. Cook minced meat with onions, tomatoes, and spices.\n2. Add diced potatoes and cook until tender.",
        ),
        recipe(
            "Mutton Seekh Kebab",
            &["minced mutton", "onions", "green chilies", "spices", "cilantro"],
            "1. Mix minced mutton with onions, chilies, and spices.\n2. Shape into skewers and grill or fry.",
        ),
        recipe(
            "Methi Paratha",
            &["flour", "fenugreek leaves", "spices", "ghee"],
            "1. Make dough with fenugreek leaves and spices.\n2. Roll into parathas and cook on a griddle with ghee.",
        ),
        recipe(
            "Pista Kulfi",
            &["milk", "sugar", "pistachios", "cardamom"],
            "1. Boil milk with sugar and cardamom until thick.\n2. Add crushed pistachios and freeze in molds.",
        ),
        recipe(
            "Chana Daal Tikki",
            &["chana daal", "spices", "green chilies", "onions"],
            "1. Boil chana daal and mash it.\n2. Shape into patties and fry until golden brown.",
        ),
        recipe(
            "Pasta Karahi",
            &["pasta", "chicken", "tomato", "green chilies", "spices"],
            "1. Cook pasta.\n2. Cook chicken with tomatoes and spices.\n3. Toss pasta in the chicken mixture.",
        ),
        recipe(
            "Dahi Bhalla",
            &["dal", "yogurt", "tamarind chutney", "spices", "cilantro"],
            "1. Soak dal vadas in water and top with yogurt.\n2. Add tamarind chutney and sprinkle spices.",
        ),
        recipe(
            "Fried Fish",
            &["fish", "spices", "flour", "oil"],
            "1. Marinate fish with spices.\n2. Coat in flour and deep fry until crispy.",
        ),
        recipe(
            "Tandoori Roti",
            &["flour", "yeast", "water", "salt", "ghee"],
            "1. Make dough with yeast and flour.\n2. Roll into rotis and bake in a tandoor.\n3. Brush with ghee.",
        ),
        recipe(
            "Bhel Puri",
            &["puffed rice", "onion", "tomato", "coriander", "tamarind chutney"],
            "1. Mix puffed rice with chopped vegetables and coriander.\n2. Add tamarind chutney and spices.",
        ),
        recipe(
            "Pulao",
            &["rice", "meat", "onion", "spices"],
            "1. Brown meat and onion.\n2. Add rice and spices, cook until rice is tender.",
        ),
        recipe(
            "Chana Pulao",
            &["rice", "chickpeas", "onion", "spices"],
            "1. Cook chickpeas with onions and spices.\n2. Add rice and cook until tender.",
        ),
        recipe(
            "Sajji",
            &["whole chicken", "spices", "yogurt", "garlic", "lemon"],
            "1. Marinate chicken with yogurt, spices, garlic, and lemon juice.\n2. Roast the whole chicken until tender.",
        ),
        recipe(
            "Dahi Ke Kebab",
            &["yogurt", "paneer", "spices", "ginger", "cilantro"],
            "1. Mix yogurt, paneer, and spices.\n2. Shape into kebabs and cook on a grill or fry in a pan.",
        ),
        recipe(
            "Lassi",
            &["yogurt", "water", "sugar", "mint"],
            "1. Blend yogurt, water, sugar, and mint.\n2. Serve chilled.",
        ),
    ])
}
