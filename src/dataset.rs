//! Bundled country population dataset used by the demo runners.
//!
//! The table preserves the survey's published order, which fixes the
//! tie-break precedence the sorted listing inherits.

use crate::chain::Chain;
use crate::data::Record;
use crate::errors::ChainError;
use crate::types::Value;

/// Country populations in their published survey order.
pub const COUNTRY_POPULATIONS: &[(&str, Value)] = &[
    ("Ukraine", 41_879_904),
    ("Brunei", 442_400),
    ("Christmas Island (Australia)", 1_928),
    ("Mauritius", 1_265_985),
    ("Lesotho", 2_007_201),
    ("Guatemala", 16_604_026),
    ("British Virgin Islands (UK)", 30_030),
    ("Malta", 493_559),
    ("Greenland (Denmark)", 56_081),
    ("Guernsey (UK)", 62_792),
    ("Ethiopia", 98_665_000),
    ("Suriname", 581_372),
    ("Turkmenistan", 6_031_187),
    ("American Samoa (US)", 56_700),
    ("French Polynesia (France)", 275_918),
    ("Equatorial Guinea", 1_358_276),
    ("Solomon Islands", 680_806),
    ("Burundi", 10_953_317),
    ("Abkhazia", 244_832),
    ("Rwanda", 12_374_397),
    ("Iceland", 364_260),
    ("Monaco", 38_300),
    ("Namibia", 2_458_936),
    ("United States", 329_532_925),
    ("Brazil", 211_402_908),
    ("Finland", 5_527_573),
    ("Armenia", 2_957_500),
    ("Wallis and Futuna (France)", 11_700),
    ("Cuba", 11_209_628),
    ("Guyana", 782_766),
    ("Oman", 4_664_790),
    ("Aruba (Netherlands)", 112_309),
    ("Nauru", 11_000),
    ("Sri Lanka", 21_803_000),
    ("Myanmar", 54_339_766),
    ("United Arab Emirates", 9_890_400),
    ("Hungary", 9_772_756),
    ("Norfolk Island (Australia)", 1_756),
    ("Cambodia", 15_288_489),
    ("Fiji", 884_887),
    ("Benin", 11_733_059),
    ("Egypt", 100_264_508),
    ("Northern Cyprus", 351_965),
    ("Angola", 31_127_674),
    ("Barbados", 287_025),
    ("Trinidad and Tobago", 1_363_985),
    ("Colombia", 49_395_678),
    ("Turks and Caicos Islands (UK)", 41_369),
    ("Norway", 5_367_580),
    ("Kiribati", 120_100),
    ("Kosovo", 1_795_666),
    ("Azerbaijan", 10_067_108),
    ("Romania", 19_405_156),
    ("Kyrgyzstan", 6_533_500),
    ("Peru", 32_131_400),
    ("Australia", 25_680_766),
    ("Faroe Islands (Denmark)", 52_124),
    ("Turkey", 83_154_997),
    ("Georgia", 3_723_464),
    ("Singapore", 5_703_600),
    ("Eswatini", 1_093_238),
    ("Saint Vincent and the Grenadines", 110_608),
    ("East Timor", 1_387_149),
    ("Tuvalu", 10_200),
    ("Pakistan", 219_313_520),
    ("Bahrain", 1_543_300),
    ("Paraguay", 7_152_703),
    ("Jersey (UK)", 106_800),
    ("Slovakia", 5_456_362),
    ("Mongolia", 3_313_049),
    ("Argentina", 44_938_712),
    ("Jordan", 10_660_256),
    ("Saint Barthélemy (France)", 9_793),
    ("Andorra", 77_543),
    ("Bangladesh", 168_456_310),
    ("Saint Martin (France)", 35_746),
    ("FS Micronesia", 104_468),
    ("South Sudan", 12_778_250),
    ("Artsakh", 148_000),
    ("Slovenia", 2_094_060),
    ("Senegal", 16_209_125),
    ("Ivory Coast", 25_823_071),
    ("Syria", 17_500_657),
    ("Montserrat (UK)", 4_989),
    ("Philippines", 108_505_959),
    ("Laos", 7_123_205),
    ("Gibraltar (UK)", 33_701),
    ("Iran", 83_371_987),
    ("Bahamas", 385_340),
    ("Mauritania", 4_077_347),
    ("Portugal", 10_276_617),
    ("Madagascar", 26_251_309),
    ("Malawi", 19_129_952),
    ("Central African Republic", 5_496_011),
    ("Saint Kitts and Nevis", 52_823),
    ("Ghana", 30_280_811),
    ("Honduras", 9_158_345),
    ("Belarus", 9_408_400),
    ("India", 1_361_140_893),
    ("Estonia", 1_328_360),
    ("Nicaragua", 6_460_411),
    ("Mali", 20_250_833),
    ("Zambia", 17_885_422),
    ("São Tomé and Príncipe", 201_784),
    ("Curaçao (Netherlands)", 158_665),
    ("Jamaica", 2_726_667),
    ("Northern Mariana Islands (US)", 56_200),
    ("Vanuatu", 304_500),
    ("Kuwait", 4_420_110),
    ("Cameroon", 26_545_864),
    ("Netherlands", 17_456_281),
    ("Saudi Arabia", 34_218_169),
    ("Dominican Republic", 10_358_320),
    ("Japan", 125_950_000),
    ("Djibouti", 1_078_373),
    ("Antigua and Barbuda", 96_453),
    ("Morocco", 35_871_167),
    ("Nigeria", 206_139_587),
    ("Iraq", 39_127_900),
    ("South Korea", 51_780_579),
    ("Pitcairn Islands (UK)", 50),
    ("US Virgin Islands (US)", 104_578),
    ("Ireland", 4_921_500),
    ("Sierra Leone", 7_901_454),
    ("Cyprus", 875_900),
    ("Palestine", 4_976_684),
    ("Luxembourg", 626_108),
    ("Falkland Islands (UK)", 3_198),
    ("France", 67_076_000),
    ("Bolivia", 11_469_896),
    ("Panama", 4_218_808),
    ("Seychelles", 97_625),
    ("Guinea-Bissau", 1_604_528),
    ("Puerto Rico (US)", 3_193_694),
    ("Anguilla (UK)", 14_869),
    ("Macau (China)", 679_600),
    ("North Macedonia", 2_077_132),
    ("Saint Helena, Ascension", 5_633),
    ("Sweden", 10_338_368),
    ("Kazakhstan", 18_683_712),
    ("China", 1_402_247_960),
    ("Italy", 60_238_522),
    ("Israel", 9_186_750),
    ("Uzbekistan", 34_131_625),
    ("Guam (US)", 172_400),
    ("Dominica", 71_808),
    ("Malaysia", 32_752_760),
    ("New Zealand", 4_978_784),
    ("Cape Verde", 550_483),
    ("Uruguay", 3_518_552),
    ("Belgium", 11_524_454),
    ("Kenya", 47_564_296),
    ("Saint Pierre and Miquelon (France)", 6_008),
    ("Uganda", 40_299_300),
    ("Yemen", 29_825_968),
    ("Nepal", 29_996_478),
    ("Switzerland", 8_603_899),
    ("Sint Maarten (Netherlands)", 40_614),
    ("Tonga", 100_651),
    ("Algeria", 43_000_000),
    ("Haiti", 11_577_779),
    ("Zimbabwe", 15_159_624),
    ("North Korea", 25_450_000),
    ("Congo", 5_518_092),
    ("Belize", 408_487),
    ("Czech Republic", 10_693_939),
    ("Poland", 38_379_000),
    ("San Marino", 33_574),
    ("Tanzania", 55_890_747),
    ("Tokelau (NZ)", 1_400),
    ("Saint Lucia", 178_696),
    ("Cook Islands (NZ)", 15_200),
    ("Mozambique", 30_066_648),
    ("Indonesia", 266_911_900),
    ("Grenada", 112_003),
    ("Burkina Faso", 20_870_060),
    ("Western Sahara", 582_463),
    ("New Caledonia (France)", 282_200),
    ("Albania", 2_845_955),
    ("Greece", 10_724_599),
    ("Bosnia and Herzegovina", 3_301_000),
    ("Montenegro", 622_359),
    ("Russia", 146_745_098),
    ("Samoa", 200_874),
    ("Comoros", 873_724),
    ("United Kingdom", 66_435_550),
    ("Taiwan", 23_604_265),
    ("Vatican City", 799),
    ("Austria", 8_902_600),
    ("Lebanon", 6_825_442),
    ("Latvia", 1_906_800),
    ("Mexico", 126_577_691),
    ("Venezuela", 32_219_521),
    ("Papua New Guinea", 8_935_000),
    ("Chad", 16_244_513),
    ("Canada", 37_996_639),
    ("Maldives", 374_775),
    ("Denmark", 5_822_763),
    ("Tajikistan", 9_127_000),
    ("Isle of Man (UK)", 83_314),
    ("Afghanistan", 32_225_560),
    ("Germany", 83_149_300),
    ("Vietnam", 96_208_984),
    ("Eritrea", 3_497_117),
    ("Spain", 47_100_396),
    ("Costa Rica", 5_058_007),
    ("Cayman Islands (UK)", 65_813),
    ("Niger", 22_314_743),
    ("Liechtenstein", 38_749),
    ("Gambia", 2_347_706),
    ("Hong Kong (China)", 7_500_700),
    ("Sudan", 42_432_665),
    ("Tunisia", 11_722_038),
    ("Åland Islands (Finland)", 29_885),
    ("DR Congo", 89_561_404),
    ("Bulgaria", 6_951_482),
    ("Liberia", 4_475_353),
    ("Botswana", 2_338_851),
    ("Palau", 17_900),
    ("Niue (NZ)", 1_520),
    ("Thailand", 66_494_417),
    ("South Africa", 58_775_022),
    ("Lithuania", 2_793_471),
    ("Gabon", 2_172_579),
    ("Libya", 6_871_287),
    ("Transnistria", 469_000),
    ("Moldova", 2_681_735),
    ("South Ossetia", 53_532),
    ("Guinea", 12_218_357),
    ("El Salvador", 6_486_201),
    ("Croatia", 4_076_246),
    ("Qatar", 2_747_282),
    ("Serbia", 6_963_764),
    ("Togo", 7_538_000),
    ("Ecuador", 17_466_864),
    ("Cocos (Keeling) Islands (Australia)", 538),
    ("Chile", 19_107_216),
    ("Bermuda (UK)", 64_027),
    ("Somalia", 15_893_219),
    ("Bhutan", 741_672),
    ("Marshall Islands", 55_500),];

/// Builds a chain holding the full dataset in its published order.
pub fn country_population_chain() -> Chain {
    country_population_chain_with_limit(None).expect("bundled dataset is non-empty")
}

/// Builds a chain from the first `limit` dataset entries (all when `None`).
///
/// Fails only when `limit` is `Some(0)`, since a chain cannot be empty.
pub fn country_population_chain_with_limit(limit: Option<usize>) -> Result<Chain, ChainError> {
    let take = limit.unwrap_or(COUNTRY_POPULATIONS.len());
    Chain::from_records(
        COUNTRY_POPULATIONS
            .iter()
            .take(take)
            .map(|&(label, value)| Record::new(label, value)),
    )
}
