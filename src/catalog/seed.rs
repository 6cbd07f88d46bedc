use super::{Amenity, AmenityId};

fn amenity(
    ordinal: usize,
    name: &str,
    estimated_cost: u32,
    description: &str,
    category: &str,
    target_demographics: &[&str],
) -> Amenity {
    Amenity {
        id: AmenityId(format!("amen-{ordinal:03}")),
        name: name.to_string(),
        estimated_cost,
        description: Some(description.to_string()),
        category: category.to_string(),
        target_demographics: target_demographics
            .iter()
            .map(|tag| tag.to_string())
            .collect(),
    }
}

/// The fixed amenity reference set. Costs are currency-agnostic magnitudes;
/// demographic tags are matched by substring, so their spelling is load-bearing.
pub(super) fn seed_amenities() -> Vec<Amenity> {
    let raw: Vec<(&str, u32, &str, &str, &[&str])> = vec![
        (
            "State-of-the-Art Gym",
            25_000,
            "Modern fitness facility with cardio, strength training, and free weights",
            "fitness",
            &["young-professionals", "health-conscious", "fitness-enthusiasts"],
        ),
        (
            "Swimming Pool & Spa",
            75_000,
            "Resort-style pool with hot tub and poolside cabanas",
            "fitness",
            &["families", "luxury-seekers", "health-conscious"],
        ),
        (
            "Yoga & Meditation Studio",
            12_000,
            "Serene space for yoga classes, meditation, and wellness activities",
            "fitness",
            &["health-conscious", "wellness-focused", "stress-relief"],
        ),
        (
            "Tennis Court",
            45_000,
            "Professional tennis court with lighting for evening play",
            "fitness",
            &["sports-enthusiasts", "affluent-residents", "active-lifestyle"],
        ),
        (
            "Basketball Court",
            30_000,
            "Full-size basketball court with professional flooring",
            "fitness",
            &["young-adults", "sports-enthusiasts", "families"],
        ),
        (
            "Co-working Space",
            15_000,
            "Modern shared workspace with high-speed internet and printing facilities",
            "work",
            &["remote-workers", "entrepreneurs", "freelancers", "young-professionals"],
        ),
        (
            "Business Center",
            20_000,
            "Professional business center with conference rooms and office equipment",
            "work",
            &["business-professionals", "entrepreneurs", "corporate-executives"],
        ),
        (
            "Conference Room",
            8_000,
            "Professional meeting space with AV equipment and video conferencing",
            "work",
            &["business-professionals", "remote-workers", "entrepreneurs"],
        ),
        (
            "Study Rooms",
            10_000,
            "Quiet study spaces with desks, Wi-Fi, and charging stations",
            "work",
            &["students", "remote-workers", "academics"],
        ),
        (
            "Rooftop Lounge",
            40_000,
            "Stunning rooftop entertainment space with city views and outdoor seating",
            "social",
            &["young-professionals", "entertainers", "luxury-seekers", "socializers"],
        ),
        (
            "Community Room",
            18_000,
            "Multipurpose space for events, parties, and community gatherings",
            "social",
            &["families", "community-oriented", "entertainers"],
        ),
        (
            "Theater Room",
            35_000,
            "Private movie theater with surround sound and premium seating",
            "social",
            &["entertainment-lovers", "families", "luxury-seekers"],
        ),
        (
            "Game Room",
            15_000,
            "Recreation room with pool table, arcade games, and entertainment systems",
            "social",
            &["young-adults", "families", "entertainment-lovers"],
        ),
        (
            "BBQ & Grilling Area",
            12_000,
            "Outdoor grilling stations with picnic tables and seating areas",
            "social",
            &["families", "entertainers", "outdoor-enthusiasts"],
        ),
        (
            "Wine Cellar & Tasting Room",
            25_000,
            "Climate-controlled wine storage with private tasting area",
            "social",
            &["wine-enthusiasts", "luxury-seekers", "entertainers"],
        ),
        (
            "Playground",
            20_000,
            "Safe, modern playground equipment for children of all ages",
            "family",
            &["families", "parents", "child-friendly"],
        ),
        (
            "Kids Club Room",
            12_000,
            "Supervised children's activity room with toys and educational materials",
            "family",
            &["families", "parents", "childcare-needs"],
        ),
        (
            "Family Pool",
            50_000,
            "Shallow family-friendly pool with safety features",
            "family",
            &["families", "parents", "child-friendly"],
        ),
        (
            "Dog Park",
            18_000,
            "Fenced off-leash area with agility equipment and waste stations",
            "pets",
            &["pet-owners", "dog-lovers"],
        ),
        (
            "Pet Wash Station",
            8_000,
            "Professional pet grooming station with tubs and supplies",
            "pets",
            &["pet-owners", "dog-lovers"],
        ),
        (
            "Pet Daycare",
            22_000,
            "On-site pet care facility with trained staff",
            "pets",
            &["pet-owners", "working-professionals"],
        ),
        (
            "Concierge Service",
            60_000,
            "24/7 concierge service for packages, reservations, and assistance",
            "luxury",
            &["luxury-seekers", "busy-professionals", "convenience-focused"],
        ),
        (
            "Valet Parking",
            50_000,
            "Professional valet parking service for residents and guests",
            "luxury",
            &["luxury-seekers", "busy-professionals", "convenience-focused"],
        ),
        (
            "Private Dining Room",
            30_000,
            "Elegant private dining space for special occasions",
            "luxury",
            &["luxury-seekers", "entertainers", "special-occasions"],
        ),
        (
            "Package Concierge",
            15_000,
            "Secure package receiving and storage system",
            "convenience",
            &["online-shoppers", "busy-professionals", "convenience-focused"],
        ),
        (
            "Laundry Facility",
            25_000,
            "High-efficiency washers and dryers with card/app payment",
            "convenience",
            &["students", "young-professionals", "convenience-focused"],
        ),
        (
            "Electric Car Charging",
            35_000,
            "Electric vehicle charging stations in parking areas",
            "convenience",
            &["eco-conscious", "tech-savvy", "electric-vehicle-owners"],
        ),
        (
            "Bike Storage & Repair",
            10_000,
            "Secure bike storage with basic repair tools and air pump",
            "convenience",
            &["cyclists", "eco-conscious", "urban-commuters"],
        ),
        (
            "Storage Units",
            20_000,
            "Individual storage units for resident belongings",
            "convenience",
            &["storage-needs", "downsizers", "urban-dwellers"],
        ),
        (
            "24/7 Security",
            80_000,
            "Round-the-clock security personnel and monitoring",
            "security",
            &["safety-conscious", "luxury-seekers", "families"],
        ),
        (
            "Smart Access Control",
            25_000,
            "Keyless entry system with smartphone integration",
            "security",
            &["tech-savvy", "convenience-focused", "security-conscious"],
        ),
        (
            "CCTV Surveillance",
            15_000,
            "Comprehensive camera system for common areas",
            "security",
            &["safety-conscious", "security-focused"],
        ),
    ];

    raw.into_iter()
        .enumerate()
        .map(|(index, (name, cost, description, category, tags))| {
            amenity(index + 1, name, cost, description, category, tags)
        })
        .collect()
}
