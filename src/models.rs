use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Product {
    pub title: String,
    pub size: String,
    pub unit_price: f32,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Results {
    #[serde(rename = "results")]
    pub products: Vec<Product>,
    pub total: f32,
}

impl Results {
    /// Appends `product` and adds its unit price to the running total.
    pub fn add_product(&mut self, product: Product) {
        self.total += product.unit_price;
        self.products.push(product);
    }
}
