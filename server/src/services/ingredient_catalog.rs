/// Ingredients offered by the picker, in display order.
pub const COMMON_INGREDIENTS: [&str; 25] = [
    "Frango", "Carne", "Peixe", "Ovos", "Leite",
    "Queijo", "Manteiga", "Arroz", "Macarrão", "Batata",
    "Tomate", "Cebola", "Alho", "Cenoura", "Brócolis",
    "Pimentão", "Alface", "Azeite", "Sal", "Pimenta",
    "Farinha", "Açúcar", "Feijão", "Milho", "Ervilha",
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_has_no_duplicates() {
        let mut names = COMMON_INGREDIENTS.to_vec();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), COMMON_INGREDIENTS.len());
    }
}
