use lightbnb::models::NewProperty;

pub struct PropertyBuilder {
    property: NewProperty,
}

impl PropertyBuilder {
    pub fn new(owner_id: i32) -> Self {
        Self {
            property: NewProperty {
                owner_id,
                title: "Speed lamp".to_string(),
                description: "description".to_string(),
                thumbnail_photo_url: "https://images.example.com/2086676/thumb.jpeg".to_string(),
                cover_photo_url: "https://images.example.com/2086676/cover.jpeg".to_string(),
                cost_per_night: 10_000,
                parking_spaces: 1,
                number_of_bathrooms: 1,
                number_of_bedrooms: 2,
                country: "Canada".to_string(),
                street: "536 Namsub Highway".to_string(),
                city: "Sotboske".to_string(),
                province: "Quebec".to_string(),
                post_code: "28142".to_string(),
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.property.title = title.to_string();
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.property.city = city.to_string();
        self
    }

    pub fn cost_per_night(mut self, cents: i32) -> Self {
        self.property.cost_per_night = cents;
        self
    }

    pub fn build(self) -> NewProperty {
        self.property
    }
}
