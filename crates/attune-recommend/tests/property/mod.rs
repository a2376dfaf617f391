mod recommend_properties;
