//! Per-module, per-dimension interpretation texts for each score level.
//!
//! The texts are shown to recruiters next to a candidate's dimension scores.
//! They are keyed by canonical dimension name, so lookups should use names
//! already passed through `resolve_dimension`.

use serde::{Deserialize, Serialize};

use crate::scoring::DimensionScore;
use crate::scoring::normalize::{categorize_score, ScoreCategory};

struct DimensionTexts {
    dimension: &'static str,
    high: &'static str,
    medium: &'static str,
    low: &'static str,
}

struct ModuleTexts {
    module_code: &'static str,
    name: &'static str,
    description: &'static str,
    dimensions: &'static [DimensionTexts],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModuleProfile {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InterpretedDimension {
    pub dimension: String,
    pub normalized_score: i32,
    pub level: ScoreCategory,
    pub interpretation: String,
}

const fn texts(
    dimension: &'static str,
    high: &'static str,
    medium: &'static str,
    low: &'static str,
) -> DimensionTexts {
    DimensionTexts {
        dimension,
        high,
        medium,
        low,
    }
}

const INTERPRETATIONS: &[ModuleTexts] = &[
    ModuleTexts {
        module_code: "PER-02",
        name: "Profil DISC",
        description: "Gaya interaksi dan komunikasi dalam lingkungan kerja",
        dimensions: &[
            texts(
                "Dominance",
                "Tegas, kompetitif, dan berorientasi pada hasil. Suka mengambil tantangan dan memimpin. Cenderung langsung dalam komunikasi dan fokus pada pencapaian target.",
                "Memiliki keseimbangan antara ketegasan dan fleksibilitas. Dapat mengambil inisiatif namun juga mampu bekerja sama dengan baik.",
                "Kooperatif, sabar, dan menghindari konflik. Lebih nyaman sebagai pendukung tim daripada pemimpin. Cenderung diplomatis dalam pendekatan.",
            ),
            texts(
                "Influence",
                "Antusias, persuasif, dan pandai bergaul. Mampu memotivasi orang lain dan membangun jaringan dengan mudah. Suka bekerja dalam tim dan lingkungan sosial.",
                "Cukup ramah dan komunikatif. Dapat berinteraksi dengan baik namun juga nyaman bekerja mandiri.",
                "Lebih suka fakta daripada emosi. Cenderung analitis dan objektif. Lebih nyaman bekerja sendiri atau dalam kelompok kecil.",
            ),
            texts(
                "Steadiness",
                "Stabil, sabar, dan dapat diandalkan. Loyal terhadap tim dan organisasi. Suka lingkungan kerja yang terstruktur dan dapat diprediksi.",
                "Fleksibel dalam menghadapi perubahan namun tetap menghargai stabilitas. Dapat beradaptasi dengan berbagai situasi.",
                "Dinamis dan menyukai perubahan. Mudah bosan dengan rutinitas. Suka tantangan baru dan variasi dalam pekerjaan.",
            ),
            texts(
                "Compliance",
                "Teliti, akurat, dan mengikuti prosedur. Kritis dalam menganalisis dan memperhatikan detail. Mengutamakan kualitas dan standar tinggi.",
                "Menghargai aturan namun tidak kaku. Dapat bekerja dengan standar yang ditetapkan sambil tetap fleksibel.",
                "Independen dan kreatif. Lebih suka pendekatan informal. Cenderung menantang aturan yang tidak masuk akal.",
            ),
        ],
    },
    ModuleTexts {
        module_code: "PER-01",
        name: "Profil Big Five",
        description: "Lima dimensi kepribadian utama dalam konteks profesional",
        dimensions: &[
            texts(
                "Openness",
                "Kreatif, imajinatif, dan terbuka terhadap pengalaman baru. Suka eksplorasi ide dan pendekatan inovatif. Cenderung berpikir abstrak.",
                "Seimbang antara tradisi dan inovasi. Dapat menerima ide baru namun juga menghargai cara-cara yang sudah terbukti.",
                "Praktis, konvensional, dan fokus pada hal konkret. Lebih suka metode yang sudah teruji daripada eksperimen.",
            ),
            texts(
                "Conscientiousness",
                "Terorganisir, disiplin, dan bertanggung jawab. Dapat diandalkan untuk menyelesaikan tugas tepat waktu. Berorientasi pada detail.",
                "Cukup teratur dan dapat diandalkan. Mampu menyeimbangkan fleksibilitas dengan struktur.",
                "Fleksibel dan spontan. Lebih suka pendekatan yang tidak terlalu terstruktur. Mungkin perlu bantuan dalam pengorganisasian.",
            ),
            texts(
                "Extraversion",
                "Energik, ramah, dan suka bersosialisasi. Nyaman dalam kelompok besar dan situasi sosial. Cenderung asertif.",
                "Dapat bersosialisasi dengan baik namun juga menikmati waktu sendiri. Seimbang antara interaksi sosial dan refleksi.",
                "Tenang, reflektif, dan lebih suka lingkungan yang tenang. Menikmati kesendirian dan pekerjaan mandiri.",
            ),
            texts(
                "Agreeableness",
                "Kooperatif, empatik, dan mudah percaya. Mengutamakan harmoni dan hubungan baik. Suka membantu orang lain.",
                "Dapat bekerja sama dengan baik namun juga mampu menegaskan pendapat sendiri bila diperlukan.",
                "Kompetitif, skeptis, dan analitis. Tidak mudah terpengaruh dan cenderung mempertanyakan motif orang lain.",
            ),
            texts(
                "Neuroticism",
                "Sensitif terhadap stres dan cenderung khawatir. Mungkin memerlukan dukungan tambahan dalam situasi menekan.",
                "Memiliki keseimbangan emosional yang wajar. Dapat mengelola stres dengan cukup baik.",
                "Tenang, stabil secara emosional, dan tahan terhadap stres. Jarang menunjukkan reaksi emosional yang berlebihan.",
            ),
        ],
    },
    ModuleTexts {
        module_code: "INT-01",
        name: "Profil Minat RIASEC",
        description: "Minat dan kecocokan peran kerja berdasarkan teori Holland",
        dimensions: &[
            texts(
                "Realistic",
                "Cocok untuk pekerjaan praktis dengan alat, mesin, atau kegiatan outdoor. Suka aktivitas hands-on dan hasil nyata.",
                "Dapat menangani tugas praktis namun tidak harus menjadi fokus utama pekerjaan.",
                "Kurang tertarik pada pekerjaan fisik atau teknis. Lebih menyukai pekerjaan yang berbasis ide.",
            ),
            texts(
                "Investigative",
                "Cocok untuk pekerjaan riset, analisis, dan pemecahan masalah kompleks. Suka belajar dan menggali informasi.",
                "Dapat melakukan analisis bila diperlukan namun tidak harus menjadi tugas utama.",
                "Kurang tertarik pada pekerjaan yang terlalu analitis atau teoretis.",
            ),
            texts(
                "Artistic",
                "Cocok untuk pekerjaan kreatif, desain, dan ekspresi diri. Suka kebebasan dan orisinalitas.",
                "Menghargai kreativitas namun juga bisa bekerja dalam struktur yang ditetapkan.",
                "Lebih nyaman dengan pekerjaan terstruktur dan prosedur yang jelas.",
            ),
            texts(
                "Social",
                "Cocok untuk pekerjaan yang melibatkan membantu, mengajar, atau melayani orang lain. Empatik dan komunikatif.",
                "Dapat berinteraksi dengan orang lain dengan baik namun tidak harus menjadi fokus utama.",
                "Lebih suka bekerja dengan data atau hal-hal daripada dengan orang.",
            ),
            texts(
                "Enterprising",
                "Cocok untuk pekerjaan kepemimpinan, penjualan, dan pengembangan bisnis. Persuasif dan ambisius.",
                "Dapat mengambil inisiatif kepemimpinan bila diperlukan.",
                "Lebih nyaman sebagai kontributor individual daripada pemimpin.",
            ),
            texts(
                "Conventional",
                "Cocok untuk pekerjaan administratif, akuntansi, dan pengolahan data. Teliti dan terorganisir.",
                "Dapat menangani tugas administratif dengan baik sebagai bagian dari peran.",
                "Kurang tertarik pada pekerjaan rutin dan administratif.",
            ),
        ],
    },
    ModuleTexts {
        module_code: "COG-01",
        name: "Kemampuan Kognitif",
        description: "Kemampuan penalaran dan pemecahan masalah",
        dimensions: &[
            texts(
                "Logic",
                "Kemampuan penalaran logis yang sangat baik. Dapat menganalisis argumen dan membuat kesimpulan dengan akurat.",
                "Kemampuan penalaran logis yang memadai untuk sebagian besar situasi kerja.",
                "Mungkin memerlukan waktu lebih untuk tugas-tugas yang membutuhkan penalaran kompleks.",
            ),
            texts(
                "Pattern",
                "Sangat baik dalam mengenali pola dan hubungan. Dapat dengan cepat mengidentifikasi tren dan anomali.",
                "Dapat mengenali pola dengan baik dalam kondisi normal.",
                "Mungkin memerlukan bantuan atau waktu ekstra untuk mengenali pola kompleks.",
            ),
            texts(
                "Reasoning",
                "Kemampuan berpikir abstrak dan konseptual yang tinggi. Dapat menangani masalah kompleks dengan baik.",
                "Kemampuan penalaran yang solid untuk tugas-tugas standar.",
                "Lebih nyaman dengan tugas konkret dan terstruktur.",
            ),
        ],
    },
    ModuleTexts {
        module_code: "ATT-01",
        name: "Ketelitian & Konsistensi",
        description: "Kemampuan bekerja dengan akurat dan konsisten",
        dimensions: &[
            texts(
                "Accuracy",
                "Sangat teliti dan akurat. Jarang membuat kesalahan dan memperhatikan detail kecil.",
                "Tingkat akurasi yang memadai untuk pekerjaan standar.",
                "Mungkin memerlukan double-check untuk pekerjaan yang membutuhkan presisi tinggi.",
            ),
            texts(
                "Speed",
                "Dapat bekerja dengan cepat tanpa mengorbankan kualitas.",
                "Kecepatan kerja yang seimbang dengan tingkat akurasi.",
                "Lebih mengutamakan ketelitian daripada kecepatan.",
            ),
            texts(
                "Consistency",
                "Sangat konsisten dalam kinerja. Dapat diandalkan untuk hasil yang stabil.",
                "Konsistensi yang memadai dengan variasi normal.",
                "Kinerja mungkin bervariasi tergantung kondisi.",
            ),
        ],
    },
    ModuleTexts {
        module_code: "WAI-01",
        name: "Sikap & Integritas Kerja",
        description: "Sikap profesional dan tanggung jawab kerja",
        dimensions: &[
            texts(
                "Integrity",
                "Menunjukkan integritas tinggi dan kejujuran. Dapat dipercaya dalam situasi sensitif.",
                "Menunjukkan standar etika yang baik dalam kondisi normal.",
                "Perlu eksplorasi lebih lanjut tentang nilai-nilai dan standar etika.",
            ),
            texts(
                "Responsibility",
                "Sangat bertanggung jawab dan dapat diandalkan. Menyelesaikan tugas tanpa perlu pengawasan.",
                "Menunjukkan tanggung jawab yang memadai dengan arahan yang jelas.",
                "Mungkin memerlukan supervisi dan arahan lebih untuk memastikan penyelesaian tugas.",
            ),
        ],
    },
    ModuleTexts {
        module_code: "RES-01",
        name: "Ketahanan & Daya Juang",
        description: "Kemampuan menghadapi tantangan dan kesulitan (AQ)",
        dimensions: &[
            texts(
                "Control",
                "Merasa memiliki kendali tinggi atas situasi. Proaktif dalam menghadapi masalah.",
                "Merasa cukup mampu mengendalikan beberapa aspek situasi.",
                "Cenderung merasa situasi di luar kendali saat menghadapi kesulitan.",
            ),
            texts(
                "Ownership",
                "Mengambil tanggung jawab penuh atas situasi dan hasil. Tidak menyalahkan orang lain.",
                "Mengakui peran sendiri sambil mempertimbangkan faktor eksternal.",
                "Cenderung melihat faktor eksternal sebagai penyebab utama masalah.",
            ),
            texts(
                "Reach",
                "Mampu membatasi dampak masalah. Tidak membiarkan satu kesulitan mempengaruhi area lain.",
                "Cukup mampu mengisolasi masalah dari area kehidupan lainnya.",
                "Kesulitan cenderung menyebar dan mempengaruhi berbagai aspek kehidupan.",
            ),
            texts(
                "Endurance",
                "Melihat kesulitan sebagai sementara. Optimis tentang kemampuan mengatasi masalah.",
                "Memahami bahwa sebagian besar kesulitan akan berlalu.",
                "Cenderung melihat kesulitan sebagai permanen atau berkepanjangan.",
            ),
        ],
    },
];

fn find_module(module_code: &str) -> Option<&'static ModuleTexts> {
    INTERPRETATIONS
        .iter()
        .find(|m| m.module_code == module_code)
}

pub fn module_profile(module_code: &str) -> Option<ModuleProfile> {
    find_module(module_code).map(|m| ModuleProfile {
        name: m.name.to_string(),
        description: m.description.to_string(),
    })
}

/// Interpretation text for a dimension at the level its score falls into.
pub fn dimension_interpretation(
    module_code: &str,
    dimension: &str,
    normalized_score: i32,
) -> Option<&'static str> {
    let texts = find_module(module_code)?
        .dimensions
        .iter()
        .find(|d| d.dimension == dimension)?;

    Some(match categorize_score(normalized_score) {
        ScoreCategory::High => texts.high,
        ScoreCategory::Medium => texts.medium,
        ScoreCategory::Low => texts.low,
    })
}

/// Pairs every scored dimension with its level and interpretation. Dimensions
/// the table does not cover get an empty interpretation.
pub fn interpret_dimensions(
    module_code: &str,
    dimensions: &[DimensionScore],
) -> Vec<InterpretedDimension> {
    dimensions
        .iter()
        .map(|d| InterpretedDimension {
            dimension: d.dimension.clone(),
            normalized_score: d.normalized_score,
            level: categorize_score(d.normalized_score),
            interpretation: dimension_interpretation(module_code, &d.dimension, d.normalized_score)
                .unwrap_or_default()
                .to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::dimensions::module_dimensions;

    fn score(dimension: &str, normalized_score: i32) -> DimensionScore {
        DimensionScore {
            dimension: dimension.to_string(),
            raw_score: 0.0,
            max_possible: 0.0,
            normalized_score,
            category: categorize_score(normalized_score),
            question_count: 1,
        }
    }

    #[test]
    fn test_level_follows_category_thresholds() {
        let high = dimension_interpretation("PER-02", "Dominance", 71).unwrap();
        let medium = dimension_interpretation("PER-02", "Dominance", 70).unwrap();
        let low = dimension_interpretation("PER-02", "Dominance", 40).unwrap();
        assert!(high.starts_with("Tegas"));
        assert!(medium.starts_with("Memiliki keseimbangan"));
        assert!(low.starts_with("Kooperatif"));
    }

    #[test]
    fn test_unknown_module_or_dimension() {
        assert!(dimension_interpretation("XYZ-01", "Dominance", 80).is_none());
        assert!(dimension_interpretation("PER-02", "General", 80).is_none());
    }

    #[test]
    fn test_interpret_dimensions_fills_gaps_with_empty_text() {
        let interpreted = interpret_dimensions("COG-01", &[score("Logic", 90), score("General", 10)]);
        assert_eq!(interpreted.len(), 2);
        assert_eq!(interpreted[0].level, ScoreCategory::High);
        assert!(!interpreted[0].interpretation.is_empty());
        assert_eq!(interpreted[1].level, ScoreCategory::Low);
        assert_eq!(interpreted[1].interpretation, "");
    }

    #[test]
    fn test_every_catalog_dimension_has_texts() {
        for module in INTERPRETATIONS {
            for dimension in module_dimensions(module.module_code) {
                assert!(
                    dimension_interpretation(module.module_code, dimension, 50).is_some(),
                    "{} / {dimension} has no interpretation",
                    module.module_code
                );
            }
        }
    }

    #[test]
    fn test_module_profile() {
        let profile = module_profile("INT-01").unwrap();
        assert_eq!(profile.name, "Profil Minat RIASEC");
        assert!(module_profile("NOPE").is_none());
    }
}
