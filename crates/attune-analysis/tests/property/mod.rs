mod analysis_properties;
