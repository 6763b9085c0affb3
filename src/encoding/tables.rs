//! Static category tables.
//!
//! Codes are the label-encoder indices the model was trained against, so they
//! follow the alphabetical order of the training data. Any change here must
//! bump [`TABLE_VERSION`] and ship together with a retrained artifact.

/// Identifier of this table set. Model artifacts declare the version they were
/// trained against and are refused at load time on mismatch.
pub const TABLE_VERSION: &str = "ipl-2024.1";

pub const TEAMS: &[(&str, i64)] = &[
    ("Chennai Super Kings", 0),
    ("Delhi Capitals", 1),
    ("Gujarat Lions", 2),
    ("Gujarat Titans", 3),
    ("Kochi Tuskers Kerala", 4),
    ("Kolkata Knight Riders", 5),
    ("Lucknow Super Giants", 6),
    ("Mumbai Indians", 7),
    ("Pune Warriors", 8),
    ("Punjab Kings", 9),
    ("Rajasthan Royals", 10),
    ("Rising Pune Supergiant", 11),
    ("Royal Challengers Bengaluru", 12),
    ("Sunrisers Hyderabad", 13),
];

pub const CITIES: &[(&str, i64)] = &[
    ("Abu Dhabi", 0),
    ("Ahmedabad", 1),
    ("Bangalore", 2),
    ("Bengaluru", 3),
    ("Bloemfontein", 4),
    ("Cape Town", 5),
    ("Centurion", 6),
    ("Chandigarh", 7),
    ("Chennai", 8),
    ("Cuttack", 9),
    ("Delhi", 10),
    ("Dharamsala", 11),
    ("Dubai", 12),
    ("Durban", 13),
    ("East London", 14),
    ("Guwahati", 15),
    ("Hyderabad", 16),
    ("Indore", 17),
    ("Jaipur", 18),
    ("Johannesburg", 19),
    ("Kanpur", 20),
    ("Kimberley", 21),
    ("Kochi", 22),
    ("Kolkata", 23),
    ("Lucknow", 24),
    ("Mohali", 25),
    ("Mumbai", 26),
    ("Nagpur", 27),
    ("Navi Mumbai", 28),
    ("Port Elizabeth", 29),
    ("Pune", 30),
    ("Raipur", 31),
    ("Rajkot", 32),
    ("Ranchi", 33),
    ("Sharjah", 34),
    ("Visakhapatnam", 35),
];

pub const VENUES: &[(&str, i64)] = &[
    ("Arun Jaitley Stadium", 0),
    ("Arun Jaitley Stadium, Delhi", 1),
    ("Barabati Stadium", 2),
    ("Barsapara Cricket Stadium, Guwahati", 3),
    ("Bharat Ratna Shri Atal Bihari Vajpayee Ekana Cricket Stadium, Lucknow", 4),
    ("Brabourne Stadium", 5),
    ("Brabourne Stadium, Mumbai", 6),
    ("Buffalo Park", 7),
    ("De Beers Diamond Oval", 8),
    ("Dr DY Patil Sports Academy", 9),
    ("Dr DY Patil Sports Academy, Mumbai", 10),
    ("Dr. Y.S. Rajasekhara Reddy ACA-VDCA Cricket Stadium", 11),
    ("Dr. Y.S. Rajasekhara Reddy ACA-VDCA Cricket Stadium, Visakhapatnam", 12),
    ("Dubai International Cricket Stadium", 13),
    ("Eden Gardens", 14),
    ("Eden Gardens, Kolkata", 15),
    ("Feroz Shah Kotla", 16),
    ("Green Park", 17),
    ("Himachal Pradesh Cricket Association Stadium", 18),
    ("Himachal Pradesh Cricket Association Stadium, Dharamsala", 19),
    ("Holkar Cricket Stadium", 20),
    ("JSCA International Stadium Complex", 21),
    ("Kingsmead", 22),
    ("M Chinnaswamy Stadium", 23),
    ("M Chinnaswamy Stadium, Bengaluru", 24),
    ("M.Chinnaswamy Stadium", 25),
    ("MA Chidambaram Stadium", 26),
    ("MA Chidambaram Stadium, Chepauk", 27),
    ("MA Chidambaram Stadium, Chepauk, Chennai", 28),
    ("Maharaja Yadavindra Singh International Cricket Stadium, Mullanpur", 29),
    ("Maharashtra Cricket Association Stadium", 30),
    ("Maharashtra Cricket Association Stadium, Pune", 31),
    ("Narendra Modi Stadium, Ahmedabad", 32),
    ("Nehru Stadium", 33),
    ("New Wanderers Stadium", 34),
    ("Newlands", 35),
    ("OUTsurance Oval", 36),
    ("Punjab Cricket Association IS Bindra Stadium", 37),
    ("Punjab Cricket Association IS Bindra Stadium, Mohali", 38),
    ("Punjab Cricket Association IS Bindra Stadium, Mohali, Chandigarh", 39),
    ("Punjab Cricket Association Stadium, Mohali", 40),
    ("Rajiv Gandhi International Stadium", 41),
    ("Rajiv Gandhi International Stadium, Uppal", 42),
    ("Rajiv Gandhi International Stadium, Uppal, Hyderabad", 43),
    ("Sardar Patel Stadium, Motera", 44),
    ("Saurashtra Cricket Association Stadium", 45),
    ("Sawai Mansingh Stadium", 46),
    ("Sawai Mansingh Stadium, Jaipur", 47),
    ("Shaheed Veer Narayan Singh International Stadium", 48),
    ("Sharjah Cricket Stadium", 49),
    ("Sheikh Zayed Stadium", 50),
    ("St George's Park", 51),
    ("Subrata Roy Sahara Stadium", 52),
    ("SuperSport Park", 53),
    ("Vidarbha Cricket Association Stadium, Jamtha", 54),
    ("Wankhede Stadium", 55),
    ("Wankhede Stadium, Mumbai", 56),
    ("Zayed Cricket Stadium, Abu Dhabi", 57),
];

pub const TOSS_DECISIONS: &[(&str, i64)] = &[("bat", 0), ("field", 1)];
