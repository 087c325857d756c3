//! Literal display records for every section of the page.
//!
//! Nothing here carries behaviour. The only field any logic looks at is
//! `GalleryItem::category`, which the gallery filter matches against.

use crate::links::MAPS_URL;

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub id: u32,
    pub image: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterOption {
    pub tag: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceOffering {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Trainer {
    pub name: &'static str,
    pub role: &'static str,
    pub specialties: &'static [&'static str],
    pub experience: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub rating: f32,
    pub category: &'static str,
    pub text: &'static str,
    pub results: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub details: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
    /// Opened in a new tab when the card is clicked.
    pub link: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MembershipPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const GALLERY_FILTERS: &[FilterOption] = &[
    FilterOption { tag: "all", label: "All" },
    FilterOption { tag: "gym", label: "Gym Equipment" },
    FilterOption { tag: "classes", label: "Group Classes" },
    FilterOption { tag: "facilities", label: "Facilities" },
];

pub const GALLERY_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        id: 1,
        image: "/images/gym1.jpg",
        title: "Modern Gym Equipment",
        category: "gym",
        description: "State-of-the-art fitness equipment for all your training needs",
    },
    GalleryItem {
        id: 2,
        image: "/images/classes.jpg",
        title: "Personal Training Session",
        category: "training",
        description: "One-on-one personal training with certified professionals",
    },
    GalleryItem {
        id: 3,
        image: "/images/classes-1.jpg",
        title: "Group Fitness Class",
        category: "classes",
        description: "High-energy group classes for motivation and fun",
    },
    GalleryItem {
        id: 4,
        image: "/images/facilities1.jpg",
        title: "Tennis Table",
        category: "facilities",
        description: "Table tennis for a break between sets",
    },
    GalleryItem {
        id: 5,
        image: "/images/gym.jpg",
        title: "Yoga Studio",
        category: "classes",
        description: "Peaceful yoga studio for mind-body wellness",
    },
    GalleryItem {
        id: 6,
        image: "/images/weight.jpg",
        title: "Weight Training Area",
        category: "gym",
        description: "Comprehensive weight training facilities",
    },
    GalleryItem {
        id: 7,
        image: "/images/snooker.jpg",
        title: "Snooker Table",
        category: "facilities",
        description: "Full-size snooker table in the members' lounge",
    },
];

pub const HERO_STATS: &[Stat] = &[
    Stat { value: 50, suffix: "+", label: "Active Members" },
    Stat { value: 5, suffix: "+", label: "Expert Trainers" },
    Stat { value: 10, suffix: "+", label: "Years Experience" },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: 10, suffix: "+", label: "Years of Excellence" },
    Stat { value: 500, suffix: "+", label: "Happy Members" },
    Stat { value: 5, suffix: "+", label: "Expert Trainers" },
    Stat { value: 60, suffix: "+", label: "Weekly Classes" },
];

pub const ABOUT_FEATURES: &[Highlight] = &[
    Highlight {
        icon: "✔",
        title: "State-of-the-Art Equipment",
        description: "Access to the latest fitness technology and equipment to maximize your workout efficiency.",
    },
    Highlight {
        icon: "✔",
        title: "Certified Personal Trainers",
        description: "Our team of certified professionals is here to guide you every step of your fitness journey.",
    },
    Highlight {
        icon: "✔",
        title: "Flexible Membership Options",
        description: "Choose from various membership plans that fit your lifestyle and fitness goals.",
    },
];

pub const ABOUT_PILLARS: &[Highlight] = &[
    Highlight {
        icon: "🎯",
        title: "Goal-Oriented Training",
        description: "Personalized programs designed to help you reach your specific fitness goals.",
    },
    Highlight {
        icon: "👥",
        title: "Expert Community",
        description: "Join a supportive community of fitness enthusiasts and professional trainers.",
    },
    Highlight {
        icon: "🏆",
        title: "Proven Results",
        description: "Thousands of members have transformed their lives with our proven methods.",
    },
];

pub const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        icon: "🏋",
        title: "Personal Training",
        description: "One-on-one sessions with certified trainers to help you reach your fitness goals faster.",
        features: &["Custom workout plans", "Progress tracking", "Nutrition guidance", "24/7 support"],
    },
    ServiceOffering {
        icon: "👥",
        title: "Group Classes",
        description: "High-energy group sessions that combine cardio, strength, and flexibility training.",
        features: &["Yoga & Pilates", "HIIT Training", "Spinning Classes", "Zumba & Dance"],
    },
    ServiceOffering {
        icon: "❤",
        title: "Cardio Zone",
        description: "State-of-the-art cardio equipment to boost your endurance and burn calories.",
        features: &["Treadmills", "Ellipticals", "Rowing Machines", "Stationary Bikes"],
    },
    ServiceOffering {
        icon: "🎯",
        title: "Strength Training",
        description: "Comprehensive strength training area with free weights and resistance machines.",
        features: &["Free Weights", "Cable Machines", "Smith Machines", "Power Racks"],
    },
    ServiceOffering {
        icon: "⏰",
        title: "24/7 Access",
        description: "Work out on your schedule with round-the-clock access to our facilities.",
        features: &["Flexible hours", "Secure access", "Clean facilities", "Emergency support"],
    },
    ServiceOffering {
        icon: "🏆",
        title: "Nutrition Coaching",
        description: "Expert nutrition guidance to complement your fitness journey and optimize results.",
        features: &["Meal planning", "Supplement advice", "Progress monitoring", "Regular consultations"],
    },
];

pub const HEAD_TRAINER: Trainer = Trainer {
    name: "Fahad",
    role: "Owner & Head Trainer",
    specialties: &["CrossFit Training", "Personal Training", "Strength Training"],
    experience: "10+ years",
    image: "/images/trainer.jpg",
    bio: "Fahad is the passionate owner and head trainer at Vision Fitness. Known for his humble nature and exceptional training expertise, he has helped hundreds of clients achieve their fitness goals. His dedication to creating a family-like atmosphere makes Vision Fitness more than just a gym - it's a community.",
    achievements: &["CrossFit Certified", "Personal Training Expert", "500+ Happy Clients", "Gym Owner"],
};

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Shahid Khan",
        role: "Member for 6 months",
        image: "/testimonials/shahid.jpg",
        rating: 5.0,
        category: "Crossfit Training",
        text: "One of the best Crossfit Training Centre in Lahore. Highly recommended. Mr Fahad (Owner of the Centre) one of the humble person i have ever met in fitness industry.",
        results: "Lost 30 lbs in 6 months",
    },
    Testimonial {
        id: 2,
        name: "Sher Azam",
        role: "Member for 10 months",
        image: "/testimonials/sher.jpg",
        rating: 5.0,
        category: "Personal Training",
        text: "Best gym in town with latest equipment and alot of options other than gym like snooker, table tennis, play station and many more… Best choice for personal trainer.",
        results: "Gained 20 lbs muscle",
    },
    Testimonial {
        id: 3,
        name: "Dua Fatima Rajput",
        role: "Member for 10 months",
        image: "/testimonials/dua.jpg",
        rating: 5.0,
        category: "General Fitness",
        text: "Amazing gym! 5/5! Great gym, awesome owner! Humble, kind & supportive. Feels like family! Best gym in lahore",
        results: "Improved strength by 50%",
    },
    Testimonial {
        id: 4,
        name: "Bari",
        role: "Member for 8 months",
        image: "/testimonials/bari.jpg",
        rating: 5.0,
        category: "Cardio & Strength",
        text: "Best gym in johar town , amazing facilities and equipment. Dedicated floor for cardio and strength training",
        results: "Completed 10K race",
    },
    Testimonial {
        id: 5,
        name: "Faisal Mahmood",
        role: "Member for 4 years",
        image: "/testimonials/faisal.jpg",
        rating: 5.0,
        category: "Equipment & Atmosphere",
        text: "Fahad is awesome. And his gym is excellent in the town. Imported equipments and amazing atmosphere. Visit and enjoy",
        results: "Achieved 6-pack abs",
    },
    Testimonial {
        id: 6,
        name: "Hafiz Asif",
        role: "Local Guide · 10 months",
        image: "/testimonials/hafiz.jpg",
        rating: 5.0,
        category: "Cleanliness & Equipment",
        text: "It's one of the best gyms. Neat and clean. Excellent machinery. 100% recommended",
        results: "Reduced body fat by 15%",
    },
    Testimonial {
        id: 7,
        name: "Asad Abbas",
        role: "Local Guide · 2 years",
        image: "/testimonials/asad.jpg",
        rating: 5.0,
        category: "Equipment & Management",
        text: "Good gym, all kind of machines available. Management is good too.",
        results: "Increased bench press by 100 lbs",
    },
    Testimonial {
        id: 8,
        name: "Mohammad Adil Khushi",
        role: "Local Guide · 4 years",
        image: "/testimonials/adil.jpg",
        rating: 4.5,
        category: "Cardio & Value",
        text: "Nice place for shredding some sweat. Has treadmills and elliptical as well. Though the gym was spacious when they started. But now with more and GOOD machines, the space is getting filled. Im giving 5 stars cux it's reasonable, close to my house and covers all my workouts.",
        results: "Improved flexibility by 60%",
    },
    Testimonial {
        id: 9,
        name: "Abdullah Sheikh",
        role: "Local Guide · 1 year",
        image: "/testimonials/abdullah.jpg",
        rating: 5.0,
        category: "Recreation Facilities",
        text: "Seems to be a good gym. Actually I was looking for some gym which has table tennis too. I visited it today & it contains table tennis & snooker and i think its one of the few gyms to have so....",
        results: "Won local fitness competition",
    },
    Testimonial {
        id: 10,
        name: "Hamza Nadeem",
        role: "Local Guide · 7 months",
        image: "/testimonials/hamza.jpg",
        rating: 5.0,
        category: "Equipment & Environment",
        text: "Very good gym with all types of equipment. Overall enviornment and experience is great so far.",
        results: "Attends 5 classes per week",
    },
];

pub const SATISFACTION_STATS: &[(&str, &str)] = &[
    ("98%", "Member Satisfaction"),
    ("4.7/5", "Average Rating"),
    ("500+", "Happy Members"),
    ("1000+", "Success Stories"),
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "📍",
        title: "Visit Us",
        details: "10 B1 PIA Main Boulevard, Block B1",
        description: "PIA Housing Scheme, Lahore, Pakistan",
        accent: "bg-red-500/10 text-red-600",
        link: Some(MAPS_URL),
    },
    ContactChannel {
        icon: "📞",
        title: "Call Us",
        details: "0332-5010579",
        description: "Available 24/7 for emergencies",
        accent: "bg-green-500/10 text-green-600",
        link: None,
    },
    ContactChannel {
        icon: "✉",
        title: "Email Us",
        details: "info@visionfitness.com",
        description: "We'll respond within 24 hours",
        accent: "bg-purple-500/10 text-purple-600",
        link: None,
    },
    ContactChannel {
        icon: "🕒",
        title: "Opening Hours",
        details: "24/7 Access",
        description: "Staff available 6 AM - 10 PM",
        accent: "bg-orange-500/10 text-orange-600",
        link: None,
    },
];

pub const MEMBERSHIP_PLANS: &[MembershipPlan] = &[
    MembershipPlan {
        name: "Basic",
        price: "$29",
        period: "/month",
        features: &["Access to gym equipment", "Locker room access", "Free parking"],
        popular: false,
    },
    MembershipPlan {
        name: "Premium",
        price: "$49",
        period: "/month",
        features: &["All Basic features", "Group classes", "Personal trainer consultation", "Towel service"],
        popular: true,
    },
    MembershipPlan {
        name: "Elite",
        price: "$79",
        period: "/month",
        features: &["All Premium features", "Unlimited personal training", "Nutrition consultation", "Spa access"],
        popular: false,
    },
];

pub const ADDRESS_LINES: &[&str] = &[
    "10 B1 PIA Main Boulevard",
    "Block B1, PIA Housing Scheme",
    "Lahore, 54770, Pakistan",
];

pub const DIRECTIONS: &[&str] = &[
    "Main Boulevard, next to PIA Housing Scheme Block B1",
    "Rickshaw and ride-hailing drop-off at the door",
    "Parking available nearby",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn gallery_ids_are_unique() {
        let ids: HashSet<u32> = GALLERY_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), GALLERY_ITEMS.len());
    }

    #[test]
    fn filter_tags_start_with_all() {
        assert_eq!(GALLERY_FILTERS[0].tag, "all");
        let tags: HashSet<&str> = GALLERY_FILTERS.iter().map(|f| f.tag).collect();
        assert_eq!(tags.len(), GALLERY_FILTERS.len());
    }

    #[test]
    fn exactly_one_plan_is_marked_popular() {
        assert_eq!(MEMBERSHIP_PLANS.iter().filter(|p| p.popular).count(), 1);
    }

    #[test]
    fn only_the_visit_card_links_out() {
        let linked: Vec<&str> = CONTACT_CHANNELS
            .iter()
            .filter(|c| c.link.is_some())
            .map(|c| c.title)
            .collect();
        assert_eq!(linked, vec!["Visit Us"]);
    }

    #[test]
    fn ratings_stay_within_five_stars() {
        assert!(TESTIMONIALS.iter().all(|t| t.rating > 0.0 && t.rating <= 5.0));
    }
}
