use serde::{Deserialize, Serialize};

/// Категория товара на Kaspi
///
/// Закрытый список категорий из справочника комиссий. Любая незнакомая
/// строка превращается в [`CategoryCode::Unknown`], для которого таблицы
/// комиссий отдают ставку по умолчанию.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryCode {
    AutoGoods,
    Accessories,
    Pharmacy,
    HomeAppliances,
    KidsGoods,
    BooksLeisure,
    Stationery,
    Computers,
    BeautyHealth,
    Furniture,
    Shoes,
    Clothing,
    Groceries,
    TvAudioVideo,
    Phones,
    HomeGarden,
    Pets,
    Jewelry,
    Cosmetics,
    Renovation,
    Sports,
    Electronics,
    Other,
    Unknown,
}

impl CategoryCode {
    /// Название категории в справочнике Kaspi (оно же код)
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryCode::AutoGoods => "Автотовары",
            CategoryCode::Accessories => "Аксессуары",
            CategoryCode::Pharmacy => "Аптека",
            CategoryCode::HomeAppliances => "Бытовая техника",
            CategoryCode::KidsGoods => "Детские товары",
            CategoryCode::BooksLeisure => "Книги/Досуг",
            CategoryCode::Stationery => "Канцелярия",
            CategoryCode::Computers => "Компьютеры",
            CategoryCode::BeautyHealth => "Красота и здоровье",
            CategoryCode::Furniture => "Мебель",
            CategoryCode::Shoes => "Обувь",
            CategoryCode::Clothing => "Одежда",
            CategoryCode::Groceries => "Продукты",
            CategoryCode::TvAudioVideo => "ТВ, Аудио, Видео",
            CategoryCode::Phones => "Телефоны",
            CategoryCode::HomeGarden => "Дом и дача",
            CategoryCode::Pets => "Животные",
            CategoryCode::Jewelry => "Украшения",
            CategoryCode::Cosmetics => "Косметика",
            CategoryCode::Renovation => "Ремонт",
            CategoryCode::Sports => "Спорт",
            CategoryCode::Electronics => "Электроника",
            CategoryCode::Other => "Прочее",
            CategoryCode::Unknown => "Неизвестная категория",
        }
    }

    /// Код категории. Совпадает с названием, как в выгрузках Kaspi.
    pub fn code(&self) -> &'static str {
        self.display_name()
    }

    /// Все выбираемые категории в порядке справочника (без `Unknown`)
    pub fn all() -> Vec<CategoryCode> {
        vec![
            CategoryCode::AutoGoods,
            CategoryCode::Accessories,
            CategoryCode::Pharmacy,
            CategoryCode::HomeAppliances,
            CategoryCode::KidsGoods,
            CategoryCode::BooksLeisure,
            CategoryCode::Stationery,
            CategoryCode::Computers,
            CategoryCode::BeautyHealth,
            CategoryCode::Furniture,
            CategoryCode::Shoes,
            CategoryCode::Clothing,
            CategoryCode::Groceries,
            CategoryCode::TvAudioVideo,
            CategoryCode::Phones,
            CategoryCode::HomeGarden,
            CategoryCode::Pets,
            CategoryCode::Jewelry,
            CategoryCode::Cosmetics,
            CategoryCode::Renovation,
            CategoryCode::Sports,
            CategoryCode::Electronics,
            CategoryCode::Other,
        ]
    }

    /// Парсинг из строки. Не падает: незнакомое название дает `Unknown`.
    pub fn from_code(code: &str) -> Self {
        let code = code.trim();
        Self::all()
            .into_iter()
            .find(|c| c.code() == code)
            .unwrap_or(CategoryCode::Unknown)
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, CategoryCode::Unknown)
    }
}

impl From<String> for CategoryCode {
    fn from(value: String) -> Self {
        CategoryCode::from_code(&value)
    }
}

impl From<CategoryCode> for String {
    fn from(value: CategoryCode) -> Self {
        value.code().to_string()
    }
}

impl std::fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
