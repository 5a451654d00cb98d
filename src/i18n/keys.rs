// SPDX-License-Identifier: MPL-2.0
//! Closed enumeration of the translation keys the site uses.
//!
//! `data-i18n` attributes in the page remain free-form strings, but internal
//! construction goes through [`TranslationKey`] so a misspelled key is a
//! compile error instead of a silently untranslated node. The completeness
//! test in `catalog` iterates [`TranslationKey::ALL`] against every language.

/// One key of the translation catalog. Identical across all languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationKey {
    // Header
    NavHome,
    NavServices,
    NavBrokerai,
    NavAbout,
    NavContact,
    GetStarted,
    // Hero section
    HeroTitle,
    HeroDescription,
    ExploreSolutions,
    ContactDirect,
    EmailUs,
    ContactUsDirectly,
    TranslateLanguage,
    // Stats section
    StatCostReduction,
    StatEfficiencyIncrease,
    StatRoi,
    // Services section
    ServicesTitle,
    ServicesDescription,
    // Service cards
    ServiceIntelligentAgentsTitle,
    ServiceIntelligentAgentsDescription,
    ServiceKeyBenefits,
    ServiceKeyBenefit1,
    ServiceKeyBenefit2,
    ServiceKeyBenefit3,
    ServiceKeyBenefit4,
    ServiceProcessAutomationTitle,
    ServiceProcessAutomationDescription,
    ServiceAutomationAreas,
    ServiceAutomationArea1,
    ServiceAutomationArea2,
    ServiceAutomationArea3,
    ServiceAutomationArea4,
    ServiceCustomAiApplicationsTitle,
    ServiceCustomAiApplicationsDescription,
    ServiceFeatures,
    ServiceFeature1,
    ServiceFeature2,
    ServiceFeature3,
    ServiceFeature4,
    // Approach section
    ApproachTitle,
    ApproachDescription,
    // Process steps
    ProcessStep1Title,
    ProcessStep1Description,
    ProcessStep2Title,
    ProcessStep2Description,
    ProcessStep3Title,
    ProcessStep3Description,
    ProcessStep4Title,
    ProcessStep4Description,
    // CTA section
    CtaTitle,
    CtaDescription,
    CtaCallUs,
    CtaSendMail,
    // BrokerAI section
    BrokeraiTitle,
    BrokeraiDescription,
    BrokeraiAccess,
    // BrokerAI features
    BrokeraiFeatureAiTitle,
    BrokeraiFeatureAiDescription,
    BrokeraiFeatureAi1,
    BrokeraiFeatureAi2,
    BrokeraiFeatureAi3,
    BrokeraiFeatureCompareTitle,
    BrokeraiFeatureCompareDescription,
    BrokeraiFeatureCompare1,
    BrokeraiFeatureCompare2,
    BrokeraiFeatureCompare3,
    BrokeraiFeatureManagementTitle,
    BrokeraiFeatureManagementDescription,
    BrokeraiFeatureManagement1,
    BrokeraiFeatureManagement2,
    BrokeraiFeatureManagement3,
    // BrokerAI benefits
    BrokeraiBenefitsTitle,
    BrokeraiBenefitTimeTitle,
    BrokeraiBenefitTimeDescription,
    BrokeraiBenefitPrecisionTitle,
    BrokeraiBenefitPrecisionDescription,
    BrokeraiBenefitProductivityTitle,
    BrokeraiBenefitProductivityDescription,
    BrokeraiBenefitServiceTitle,
    BrokeraiBenefitServiceDescription,
    // Footer
    FooterCompany,
    FooterAboutUs,
    FooterServices,
    FooterCaseStudies,
    FooterCareers,
    FooterSolutions,
    FooterAiApplications,
    FooterIntelligentAgents,
    FooterProcessAutomation,
    FooterDataAnalytics,
    FooterContactUs,
    FooterCopyright,
    FooterDescription,
}

impl TranslationKey {
    pub const ALL: [TranslationKey; 93] = [
        TranslationKey::NavHome,
        TranslationKey::NavServices,
        TranslationKey::NavBrokerai,
        TranslationKey::NavAbout,
        TranslationKey::NavContact,
        TranslationKey::GetStarted,
        TranslationKey::HeroTitle,
        TranslationKey::HeroDescription,
        TranslationKey::ExploreSolutions,
        TranslationKey::ContactDirect,
        TranslationKey::EmailUs,
        TranslationKey::ContactUsDirectly,
        TranslationKey::TranslateLanguage,
        TranslationKey::StatCostReduction,
        TranslationKey::StatEfficiencyIncrease,
        TranslationKey::StatRoi,
        TranslationKey::ServicesTitle,
        TranslationKey::ServicesDescription,
        TranslationKey::ServiceIntelligentAgentsTitle,
        TranslationKey::ServiceIntelligentAgentsDescription,
        TranslationKey::ServiceKeyBenefits,
        TranslationKey::ServiceKeyBenefit1,
        TranslationKey::ServiceKeyBenefit2,
        TranslationKey::ServiceKeyBenefit3,
        TranslationKey::ServiceKeyBenefit4,
        TranslationKey::ServiceProcessAutomationTitle,
        TranslationKey::ServiceProcessAutomationDescription,
        TranslationKey::ServiceAutomationAreas,
        TranslationKey::ServiceAutomationArea1,
        TranslationKey::ServiceAutomationArea2,
        TranslationKey::ServiceAutomationArea3,
        TranslationKey::ServiceAutomationArea4,
        TranslationKey::ServiceCustomAiApplicationsTitle,
        TranslationKey::ServiceCustomAiApplicationsDescription,
        TranslationKey::ServiceFeatures,
        TranslationKey::ServiceFeature1,
        TranslationKey::ServiceFeature2,
        TranslationKey::ServiceFeature3,
        TranslationKey::ServiceFeature4,
        TranslationKey::ApproachTitle,
        TranslationKey::ApproachDescription,
        TranslationKey::ProcessStep1Title,
        TranslationKey::ProcessStep1Description,
        TranslationKey::ProcessStep2Title,
        TranslationKey::ProcessStep2Description,
        TranslationKey::ProcessStep3Title,
        TranslationKey::ProcessStep3Description,
        TranslationKey::ProcessStep4Title,
        TranslationKey::ProcessStep4Description,
        TranslationKey::CtaTitle,
        TranslationKey::CtaDescription,
        TranslationKey::CtaCallUs,
        TranslationKey::CtaSendMail,
        TranslationKey::BrokeraiTitle,
        TranslationKey::BrokeraiDescription,
        TranslationKey::BrokeraiAccess,
        TranslationKey::BrokeraiFeatureAiTitle,
        TranslationKey::BrokeraiFeatureAiDescription,
        TranslationKey::BrokeraiFeatureAi1,
        TranslationKey::BrokeraiFeatureAi2,
        TranslationKey::BrokeraiFeatureAi3,
        TranslationKey::BrokeraiFeatureCompareTitle,
        TranslationKey::BrokeraiFeatureCompareDescription,
        TranslationKey::BrokeraiFeatureCompare1,
        TranslationKey::BrokeraiFeatureCompare2,
        TranslationKey::BrokeraiFeatureCompare3,
        TranslationKey::BrokeraiFeatureManagementTitle,
        TranslationKey::BrokeraiFeatureManagementDescription,
        TranslationKey::BrokeraiFeatureManagement1,
        TranslationKey::BrokeraiFeatureManagement2,
        TranslationKey::BrokeraiFeatureManagement3,
        TranslationKey::BrokeraiBenefitsTitle,
        TranslationKey::BrokeraiBenefitTimeTitle,
        TranslationKey::BrokeraiBenefitTimeDescription,
        TranslationKey::BrokeraiBenefitPrecisionTitle,
        TranslationKey::BrokeraiBenefitPrecisionDescription,
        TranslationKey::BrokeraiBenefitProductivityTitle,
        TranslationKey::BrokeraiBenefitProductivityDescription,
        TranslationKey::BrokeraiBenefitServiceTitle,
        TranslationKey::BrokeraiBenefitServiceDescription,
        TranslationKey::FooterCompany,
        TranslationKey::FooterAboutUs,
        TranslationKey::FooterServices,
        TranslationKey::FooterCaseStudies,
        TranslationKey::FooterCareers,
        TranslationKey::FooterSolutions,
        TranslationKey::FooterAiApplications,
        TranslationKey::FooterIntelligentAgents,
        TranslationKey::FooterProcessAutomation,
        TranslationKey::FooterDataAnalytics,
        TranslationKey::FooterContactUs,
        TranslationKey::FooterCopyright,
        TranslationKey::FooterDescription,
    ];

    /// The `data-i18n` attribute value for this key.
    pub fn as_str(self) -> &'static str {
        match self {
            TranslationKey::NavHome => "nav_home",
            TranslationKey::NavServices => "nav_services",
            TranslationKey::NavBrokerai => "nav_brokerai",
            TranslationKey::NavAbout => "nav_about",
            TranslationKey::NavContact => "nav_contact",
            TranslationKey::GetStarted => "get_started",
            TranslationKey::HeroTitle => "hero_title",
            TranslationKey::HeroDescription => "hero_description",
            TranslationKey::ExploreSolutions => "explore_solutions",
            TranslationKey::ContactDirect => "contact_direct",
            TranslationKey::EmailUs => "email_us",
            TranslationKey::ContactUsDirectly => "contact_us_directly",
            TranslationKey::TranslateLanguage => "translate_language",
            TranslationKey::StatCostReduction => "stat_cost_reduction",
            TranslationKey::StatEfficiencyIncrease => "stat_efficiency_increase",
            TranslationKey::StatRoi => "stat_roi",
            TranslationKey::ServicesTitle => "services_title",
            TranslationKey::ServicesDescription => "services_description",
            TranslationKey::ServiceIntelligentAgentsTitle => "service_intelligent_agents_title",
            TranslationKey::ServiceIntelligentAgentsDescription => {
                "service_intelligent_agents_description"
            }
            TranslationKey::ServiceKeyBenefits => "service_key_benefits",
            TranslationKey::ServiceKeyBenefit1 => "service_key_benefit_1",
            TranslationKey::ServiceKeyBenefit2 => "service_key_benefit_2",
            TranslationKey::ServiceKeyBenefit3 => "service_key_benefit_3",
            TranslationKey::ServiceKeyBenefit4 => "service_key_benefit_4",
            TranslationKey::ServiceProcessAutomationTitle => "service_process_automation_title",
            TranslationKey::ServiceProcessAutomationDescription => {
                "service_process_automation_description"
            }
            TranslationKey::ServiceAutomationAreas => "service_automation_areas",
            TranslationKey::ServiceAutomationArea1 => "service_automation_area_1",
            TranslationKey::ServiceAutomationArea2 => "service_automation_area_2",
            TranslationKey::ServiceAutomationArea3 => "service_automation_area_3",
            TranslationKey::ServiceAutomationArea4 => "service_automation_area_4",
            TranslationKey::ServiceCustomAiApplicationsTitle => {
                "service_custom_ai_applications_title"
            }
            TranslationKey::ServiceCustomAiApplicationsDescription => {
                "service_custom_ai_applications_description"
            }
            TranslationKey::ServiceFeatures => "service_features",
            TranslationKey::ServiceFeature1 => "service_feature_1",
            TranslationKey::ServiceFeature2 => "service_feature_2",
            TranslationKey::ServiceFeature3 => "service_feature_3",
            TranslationKey::ServiceFeature4 => "service_feature_4",
            TranslationKey::ApproachTitle => "approach_title",
            TranslationKey::ApproachDescription => "approach_description",
            TranslationKey::ProcessStep1Title => "process_step_1_title",
            TranslationKey::ProcessStep1Description => "process_step_1_description",
            TranslationKey::ProcessStep2Title => "process_step_2_title",
            TranslationKey::ProcessStep2Description => "process_step_2_description",
            TranslationKey::ProcessStep3Title => "process_step_3_title",
            TranslationKey::ProcessStep3Description => "process_step_3_description",
            TranslationKey::ProcessStep4Title => "process_step_4_title",
            TranslationKey::ProcessStep4Description => "process_step_4_description",
            TranslationKey::CtaTitle => "cta_title",
            TranslationKey::CtaDescription => "cta_description",
            TranslationKey::CtaCallUs => "cta_call_us",
            TranslationKey::CtaSendMail => "cta_send_mail",
            TranslationKey::BrokeraiTitle => "brokerai_title",
            TranslationKey::BrokeraiDescription => "brokerai_description",
            TranslationKey::BrokeraiAccess => "brokerai_access",
            TranslationKey::BrokeraiFeatureAiTitle => "brokerai_feature_ai_title",
            TranslationKey::BrokeraiFeatureAiDescription => "brokerai_feature_ai_description",
            TranslationKey::BrokeraiFeatureAi1 => "brokerai_feature_ai_1",
            TranslationKey::BrokeraiFeatureAi2 => "brokerai_feature_ai_2",
            TranslationKey::BrokeraiFeatureAi3 => "brokerai_feature_ai_3",
            TranslationKey::BrokeraiFeatureCompareTitle => "brokerai_feature_compare_title",
            TranslationKey::BrokeraiFeatureCompareDescription => {
                "brokerai_feature_compare_description"
            }
            TranslationKey::BrokeraiFeatureCompare1 => "brokerai_feature_compare_1",
            TranslationKey::BrokeraiFeatureCompare2 => "brokerai_feature_compare_2",
            TranslationKey::BrokeraiFeatureCompare3 => "brokerai_feature_compare_3",
            TranslationKey::BrokeraiFeatureManagementTitle => "brokerai_feature_management_title",
            TranslationKey::BrokeraiFeatureManagementDescription => {
                "brokerai_feature_management_description"
            }
            TranslationKey::BrokeraiFeatureManagement1 => "brokerai_feature_management_1",
            TranslationKey::BrokeraiFeatureManagement2 => "brokerai_feature_management_2",
            TranslationKey::BrokeraiFeatureManagement3 => "brokerai_feature_management_3",
            TranslationKey::BrokeraiBenefitsTitle => "brokerai_benefits_title",
            TranslationKey::BrokeraiBenefitTimeTitle => "brokerai_benefit_time_title",
            TranslationKey::BrokeraiBenefitTimeDescription => "brokerai_benefit_time_description",
            TranslationKey::BrokeraiBenefitPrecisionTitle => "brokerai_benefit_precision_title",
            TranslationKey::BrokeraiBenefitPrecisionDescription => {
                "brokerai_benefit_precision_description"
            }
            TranslationKey::BrokeraiBenefitProductivityTitle => {
                "brokerai_benefit_productivity_title"
            }
            TranslationKey::BrokeraiBenefitProductivityDescription => {
                "brokerai_benefit_productivity_description"
            }
            TranslationKey::BrokeraiBenefitServiceTitle => "brokerai_benefit_service_title",
            TranslationKey::BrokeraiBenefitServiceDescription => {
                "brokerai_benefit_service_description"
            }
            TranslationKey::FooterCompany => "footer_company",
            TranslationKey::FooterAboutUs => "footer_about_us",
            TranslationKey::FooterServices => "footer_services",
            TranslationKey::FooterCaseStudies => "footer_case_studies",
            TranslationKey::FooterCareers => "footer_careers",
            TranslationKey::FooterSolutions => "footer_solutions",
            TranslationKey::FooterAiApplications => "footer_ai_applications",
            TranslationKey::FooterIntelligentAgents => "footer_intelligent_agents",
            TranslationKey::FooterProcessAutomation => "footer_process_automation",
            TranslationKey::FooterDataAnalytics => "footer_data_analytics",
            TranslationKey::FooterContactUs => "footer_contact_us",
            TranslationKey::FooterCopyright => "footer_copyright",
            TranslationKey::FooterDescription => "footer_description",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_keys_are_unique() {
        let strings: HashSet<&str> = TranslationKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(strings.len(), TranslationKey::ALL.len());
    }

    #[test]
    fn key_strings_match_attribute_convention() {
        for key in TranslationKey::ALL {
            let s = key.as_str();
            assert!(!s.is_empty());
            assert!(
                s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "unexpected character in key {s:?}"
            );
        }
    }
}
